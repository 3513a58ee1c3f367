//! Textual `friend` counting over a C++ header.
//!
//! No C++ is parsed: a tracked class body starts at a `class Name` line and
//! ends at the next `};` in column 0. Every line inside the body that starts
//! with the `friend` keyword counts once.

use regex::Regex;

pub const DEFAULT_CLASSES: [&str; 2] = ["BigInteger", "Rational"];
pub const DEFAULT_MAX_FRIENDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReport {
    pub name: String,
    /// 1-based line of the class head
    pub line: usize,
    pub friends: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Too many friends in class {name}: {friends} (at most {max} allowed, class starts at line {line})")]
pub struct Violation {
    pub name: String,
    pub line: usize,
    pub friends: usize,
    pub max: usize,
}

#[derive(Debug)]
pub struct FriendScanner {
    class_open: Regex,
    friend: Regex,
    class_close: Regex,
    inline_close: Regex,
    inline_friend: Regex,
}

impl FriendScanner {
    pub fn new<S: AsRef<str>>(classes: &[S]) -> anyhow::Result<Self> {
        anyhow::ensure!(!classes.is_empty(), "no classes to track");
        let names = classes
            .iter()
            .map(|name| regex::escape(name.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        // group 2 only matches forward declarations like `class Rational;`
        let class_open = Regex::new(&format!(r"^\s*(?:class|struct)\s+({names})\b(\s*;)?"))?;
        Ok(Self {
            class_open,
            friend: Regex::new(r"^\s*friend\b")?,
            class_close: Regex::new(r"^};")?,
            inline_close: Regex::new(r"\}\s*;\s*$")?,
            inline_friend: Regex::new(r"\bfriend\b")?,
        })
    }

    pub fn scan(&self, text: &str) -> Vec<ClassReport> {
        let mut reports = Vec::new();
        let mut current: Option<ClassReport> = None;

        for (line_idx, line) in text.lines().enumerate() {
            if let Some(caps) = self.class_open.captures(line) {
                if caps.get(2).is_none() {
                    reports.extend(current.take());
                    let mut class = ClassReport {
                        name: caps[1].to_owned(),
                        line: line_idx + 1,
                        friends: 0,
                    };
                    // `class Name { ... };` on a single line
                    if self.inline_close.is_match(line) {
                        let body = line.split_once('{').map_or("", |(_, body)| body);
                        class.friends = self.inline_friend.find_iter(body).count();
                        reports.push(class);
                    } else {
                        current = Some(class);
                    }
                    continue;
                }
            }
            let Some(class) = current.as_mut() else {
                continue;
            };
            if self.friend.is_match(line) {
                class.friends += 1;
                tracing::debug!(class = %class.name, line = line_idx + 1, "friend declaration");
            } else if self.class_close.is_match(line) {
                reports.extend(current.take());
            }
        }
        // unterminated body at EOF
        reports.extend(current);
        reports
    }
}

/// First violating class in file order wins.
pub fn check(reports: &[ClassReport], max: usize) -> Result<(), Violation> {
    match reports.iter().find(|report| report.friends > max) {
        Some(report) => Err(Violation {
            name: report.name.clone(),
            line: report.line,
            friends: report.friends,
            max,
        }),
        None => Ok(()),
    }
}
