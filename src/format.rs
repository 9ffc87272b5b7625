use crate::config::{Entry, MainConfig};

/// Renders the complete LaTeX source for the given content settings.
///
/// Sections are emitted in fixed order (document class, packages, other
/// preamble, title block, body), blank sections are omitted entirely, and
/// non-empty sections are separated by one blank line. The function is pure:
/// identical input yields byte-identical output.
pub fn render(main: &MainConfig) -> String {
    let mut sections = vec![document_class(&main.document_class)];

    if let Some(section) = packages(&main.packages) {
        sections.push(section);
    }
    if let Some(section) = other_preamble(&main.other_preamble) {
        sections.push(section);
    }

    let title = title_block(main);
    let maketitle = title.is_some();
    if let Some(section) = title {
        sections.push(section);
    }

    sections.push(body(&main.text, maketitle));
    sections.join("\n\n")
}

/// Emits `\command{name}`, with the options in a bracket group when present.
fn latex_command(command: &str, entry: &Entry) -> String {
    match entry.options() {
        Some(options) => {
            format!("\\{}[{}]{{{}}}", command, options.join(", "), entry.name())
        }
        None => format!("\\{}{{{}}}", command, entry.name()),
    }
}

fn document_class(class: &Entry) -> String {
    format!("% Document class.\n{}", latex_command("documentclass", class))
}

fn packages(packages: &[Entry]) -> Option<String> {
    if packages.is_empty() {
        return None;
    }

    let lines: Vec<String> =
        packages.iter().map(|package| latex_command("usepackage", package)).collect();
    Some(format!("% Packages.\n{}", lines.join("\n")))
}

fn other_preamble(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("% Other preamble.\n{}", trimmed))
    }
}

/// The title block is only emitted when at least one of title, author and
/// date is non-blank; all three lines are present whenever it appears.
fn title_block(main: &MainConfig) -> Option<String> {
    let all_blank = main.title.trim().is_empty()
        && main.author.trim().is_empty()
        && main.date.trim().is_empty();
    if all_blank {
        return None;
    }

    Some(format!(
        "% Title, author and date.\n\\title{{{}}}\n\\author{{{}}}\n\\date{{{}}}",
        main.title, main.author, main.date
    ))
}

fn body(text: &str, maketitle: bool) -> String {
    let mut lines = vec!["\\begin{document}".to_string()];
    if maketitle {
        lines.push("\\maketitle".to_string());
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }

    lines.push("\\end{document}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let main = MainConfig::default();
        assert_eq!(
            render(&main),
            "% Document class.\n\\documentclass{article}\n\n\
             \\begin{document}\n\\end{document}"
        );
    }

    #[test]
    fn test_deterministic() {
        let main = MainConfig {
            title: "A title".to_string(),
            text: "Some body text.".to_string(),
            packages: vec![Entry::Name("amsmath".to_string())],
            ..MainConfig::default()
        };
        assert_eq!(render(&main), render(&main));
    }

    #[test]
    fn test_blank_title_block_is_absent() {
        let main = MainConfig {
            title: "".to_string(),
            author: "".to_string(),
            date: "".to_string(),
            text: "Body.".to_string(),
            ..MainConfig::default()
        };

        let text = render(&main);
        assert!(!text.contains("\\title"));
        assert!(!text.contains("% Title, author and date."));
        assert!(!text.contains("\\maketitle"));
    }

    #[test]
    fn test_single_non_blank_field_emits_title_block() {
        let main = MainConfig { author: "An Author".to_string(), ..MainConfig::default() };

        let text = render(&main);
        assert!(text.contains(
            "% Title, author and date.\n\\title{}\n\\author{An Author}\n\\date{}"
        ));
        assert!(text.contains("\\begin{document}\n\\maketitle\n\\end{document}"));
    }

    #[test]
    fn test_package_lines_with_and_without_options() {
        let main = MainConfig {
            packages: vec![
                Entry::Name("amsmath".to_string()),
                Entry::WithOptions("geometry".to_string(), vec!["margin=1in".to_string()]),
            ],
            ..MainConfig::default()
        };

        let text = render(&main);
        assert!(text.contains(
            "% Packages.\n\\usepackage{amsmath}\n\\usepackage[margin=1in]{geometry}"
        ));
    }

    #[test]
    fn test_document_class_options() {
        let main = MainConfig {
            document_class: Entry::WithOptions(
                "article".to_string(),
                vec!["a4paper".to_string(), "twocolumn".to_string()],
            ),
            ..MainConfig::default()
        };

        let text = render(&main);
        assert!(text.starts_with(
            "% Document class.\n\\documentclass[a4paper, twocolumn]{article}"
        ));
    }

    #[test]
    fn test_whitespace_preamble_is_absent() {
        let main =
            MainConfig { other_preamble: "   \n  ".to_string(), ..MainConfig::default() };
        assert!(!render(&main).contains("% Other preamble."));
    }

    #[test]
    fn test_preamble_and_body_are_trimmed() {
        let main = MainConfig {
            other_preamble: "\n\\newcommand{\\x}{y}\n".to_string(),
            text: "  Hello.  ".to_string(),
            ..MainConfig::default()
        };

        let text = render(&main);
        assert!(text.contains("% Other preamble.\n\\newcommand{\\x}{y}\n\n"));
        assert!(text.contains("\\begin{document}\nHello.\n\\end{document}"));
    }
}
