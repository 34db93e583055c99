//! Intermediate document tree and its Markdown rendering.

/// A node of the composed document before it is turned into text.
///
/// Builders only ever produce non-empty fragments, so rendering never has to
/// decide whether something belongs in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Top-level `# ...` line.
    Title(String),
    /// Heading at `level` followed by its children.
    Section { level: usize, title: String, children: Vec<Fragment> },
    /// Opaque paragraph text.
    Text(String),
    /// `- item` lines.
    Bullets(Vec<String>),
}

impl Fragment {
    /// Wrap children under a heading, or drop the heading when nothing is left.
    pub fn section(level: usize, title: &str, children: Vec<Fragment>) -> Option<Fragment> {
        if children.is_empty() {
            return None;
        }
        Some(Fragment::Section { level, title: title.to_string(), children })
    }

    pub fn bullets(items: Vec<String>) -> Option<Fragment> {
        if items.is_empty() { None } else { Some(Fragment::Bullets(items)) }
    }
}

/// Render fragments in order into `out`.
pub fn render(fragments: &[Fragment], out: &mut String) {
    for fragment in fragments {
        render_one(fragment, out);
    }
}

fn render_one(fragment: &Fragment, out: &mut String) {
    match fragment {
        Fragment::Title(title) => {
            out.push_str("# ");
            out.push_str(title);
            out.push_str("\n\n");
        }
        Fragment::Section { level, title, children } => {
            out.push_str(&"#".repeat(*level));
            out.push(' ');
            out.push_str(title);
            out.push('\n');
            render(children, out);
        }
        Fragment::Text(text) => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        Fragment::Bullets(items) => {
            for item in items {
                out.push_str("- ");
                out.push_str(item);
                out.push('\n');
            }
            out.push('\n');
        }
    }
}
