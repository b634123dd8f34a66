// src/ui/view.rs
// Minimal render tree and a text renderer for terminals.

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading { level: u8, text: String },
    Text { text: String, tone: Tone },
    /// Children with a `Plain` tone take the group's tone.
    Group { tone: Tone, children: Vec<Node> },
}

/// One rendered line with the tone it ends up drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Node {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::toned(Tone::Plain, text)
    }

    pub fn toned(tone: Tone, text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn group(tone: Tone, children: Vec<Node>) -> Self {
        Node::Group { tone, children }
    }

    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        self.collect_lines(Tone::Plain, &mut lines);
        lines
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.text.contains(needle))
    }

    fn collect_lines(&self, inherited: Tone, out: &mut Vec<Line>) {
        match self {
            Node::Heading { text, .. } => out.push(Line {
                tone: Tone::Plain,
                text: text.clone(),
            }),
            Node::Text { text, tone } => out.push(Line {
                tone: resolve(*tone, inherited),
                text: text.clone(),
            }),
            Node::Group { tone, children } => {
                let tone = resolve(*tone, inherited);
                for child in children {
                    child.collect_lines(tone, out);
                }
            }
        }
    }
}

fn resolve(own: Tone, inherited: Tone) -> Tone {
    match own {
        Tone::Plain => inherited,
        other => other,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.render_into(node, Tone::Plain, &mut out);
        out
    }

    fn render_into(&self, node: &Node, inherited: Tone, out: &mut String) {
        match node {
            Node::Heading { level, text } => {
                if self.color {
                    out.push_str(BOLD);
                    out.push_str(text);
                    out.push_str(RESET);
                } else {
                    out.push_str(text);
                }
                out.push('\n');

                let rule = match level {
                    1 => Some('='),
                    2 => Some('-'),
                    _ => None,
                };
                if let Some(ch) = rule {
                    out.extend(std::iter::repeat(ch).take(text.chars().count()));
                    out.push('\n');
                }
            }
            Node::Text { text, tone } => {
                let tone = resolve(*tone, inherited);
                match (self.color, tone) {
                    (true, Tone::Success) => {
                        out.push_str(GREEN);
                        out.push_str(text);
                        out.push_str(RESET);
                    }
                    (true, Tone::Error) => {
                        out.push_str(RED);
                        out.push_str(text);
                        out.push_str(RESET);
                    }
                    _ => out.push_str(text),
                }
                out.push('\n');
            }
            Node::Group { tone, children } => {
                let tone = resolve(*tone, inherited);
                for child in children {
                    self.render_into(child, tone, out);
                }
            }
        }
    }
}
