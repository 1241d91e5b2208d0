//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：第一个单词补全命令，其后补全顶点标签

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令关键字列表
const COMMANDS: &[&str] = &[
    "help",
    "quit",
    "exit",
    "stats",
    "info",
    "vertices",
    "clear",
    "vertex",
    "remove-vertex",
    "edge",
    "remove-edge",
    "has-edge",
    "neighbors",
    "bfs",
    "path",
    "hops",
];

/// undigraph CLI 补全器
#[derive(Default)]
pub struct GraphCompleter {
    /// 当前图中的顶点标签
    labels: Vec<String>,
}

impl GraphCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新可补全的顶点标签
    pub fn set_labels<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.labels = labels.into_iter().collect();
    }

    /// 计算补全候选，返回替换起始位置和候选列表
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        let start = line_to_cursor
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let current = &line_to_cursor[start..];

        let is_first_word = line_to_cursor[..start].trim().is_empty();
        let matches: Vec<String> = if is_first_word {
            let lower = current.to_lowercase();
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(&lower))
                .map(|cmd| cmd.to_string())
                .collect()
        } else {
            self.labels
                .iter()
                .filter(|label| label.starts_with(current))
                .cloned()
                .collect()
        };

        (start, matches)
    }
}

impl Completer for GraphCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let completions = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m,
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for GraphCompleter {
    type Hint = String;
}

impl Highlighter for GraphCompleter {}

impl Validator for GraphCompleter {}

impl Helper for GraphCompleter {}
