//! Document-structure passes
//!
//! Strips LaTeX scaffolding with no spoken content (preamble, environments,
//! spacing commands) and rewrites sectioning commands into labeled lines.
//! Rules are applied in list order.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FULL_LINE_COMMENT: Regex = Regex::new(r"(?m)^%[^\n]*\n?").unwrap();
    // One char of context keeps escaped percent signs (\%) intact.
    static ref TRAILING_COMMENT: Regex = Regex::new(r"([^\\])%[^\n]*").unwrap();

    static ref PREAMBLE: Regex = Regex::new(r"(?s)^.*?\\begin\{document\}").unwrap();
    static ref POSTAMBLE: Regex = Regex::new(r"(?s)\\end\{document\}.*$").unwrap();

    // Sub-section before section: the more specific command must win.
    static ref SUBSECTION: Regex = Regex::new(r"\\subsection\*?\{([^}]*)\}").unwrap();
    static ref SECTION: Regex = Regex::new(r"\\section\*?\{([^}]*)\}").unwrap();

    static ref SCAFFOLD_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\\documentclass(\[[^\]]*\])?\{[^}]*\}").unwrap(), ""),
        (Regex::new(r"\\usepackage(\[[^\]]*\])?\{[^}]*\}").unwrap(), ""),
        (Regex::new(r"\\(title|author|date)\{[^}]*\}").unwrap(), ""),
        (Regex::new(r"\\maketitle").unwrap(), ""),
        (Regex::new(r"\\label\{[^}]*\}").unwrap(), ""),
        (Regex::new(r"\\textwidth").unwrap(), ""),
        (Regex::new(r"\\left\b").unwrap(), ""),
        (Regex::new(r"\\right\b").unwrap(), ""),
        (Regex::new(r"\\q?quad\b").unwrap(), " "),
        (Regex::new(r"\\begin\{[^}]*\}(\[[^\]]*\])?").unwrap(), " "),
        (Regex::new(r"\\end\{[^}]*\}").unwrap(), " "),
        (Regex::new(r"\\item\b").unwrap(), " item "),
        // Line breaks and spacing commands read as plain gaps
        (Regex::new(r"\\\\\*?").unwrap(), " "),
        (Regex::new(r"\\[,;:!]").unwrap(), " "),
        (Regex::new(r"~").unwrap(), " "),
    ];
}

/// Remove `%` comments. Escaped `\%` is left for the symbol cleanup pass.
pub fn strip_comments(input: &str) -> String {
    let text = FULL_LINE_COMMENT.replace_all(input, "");
    TRAILING_COMMENT.replace_all(&text, "$1").into_owned()
}

/// Remove the preamble (when `\begin{document}` is present), trailing
/// `\end{document}` material, and structural commands with nothing to say.
pub fn strip_document_scaffolding(input: &str) -> String {
    let text = PREAMBLE.replace(input, "");
    let mut text = POSTAMBLE.replace(&text, "").into_owned();
    for (pattern, replacement) in SCAFFOLD_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Rewrite `\section{X}` and `\subsection{X}` (starred or not) into labeled
/// lines on their own paragraph. Numbering is not reconstructed.
pub fn label_sections(input: &str) -> String {
    let text = SUBSECTION.replace_all(input, "\n\nSub-section: $1\n\n");
    SECTION
        .replace_all(&text, "\n\nSection: $1\n\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line_comment_removed() {
        assert_eq!(strip_comments("a\n% note\nb"), "a\nb");
    }

    #[test]
    fn test_trailing_comment_removed() {
        assert_eq!(strip_comments("a % note\nb"), "a \nb");
    }

    #[test]
    fn test_escaped_percent_survives() {
        assert_eq!(strip_comments("50\\% done"), "50\\% done");
    }

    #[test]
    fn test_preamble_stripped() {
        let input = "\\documentclass{article}\\usepackage{amsmath}\\begin{document}body\\end{document}trailer";
        assert_eq!(strip_document_scaffolding(input), "body");
    }

    #[test]
    fn test_fragment_scaffolding_stripped() {
        // No \begin{document}: individual commands still go away
        let text = strip_document_scaffolding("\\documentclass[12pt]{article} x \\maketitle y");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn test_environments_and_items() {
        let text = strip_document_scaffolding("\\begin{itemize}\\item one\\item two\\end{itemize}");
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            ["item", "one", "item", "two"]
        );
    }

    #[test]
    fn test_left_right_removed() {
        let text = strip_document_scaffolding("\\left( x \\right)");
        assert_eq!(text, "( x )");
    }

    #[test]
    fn test_section_labeled() {
        let text = label_sections("\\section{Intro}");
        assert!(text.contains("Section: Intro"));
        assert!(!text.contains("\\section"));
    }

    #[test]
    fn test_starred_section_same_label() {
        assert_eq!(
            label_sections("\\section*{Intro}"),
            label_sections("\\section{Intro}")
        );
    }

    #[test]
    fn test_subsection_not_mistaken_for_section() {
        let text = label_sections("\\subsection{Detail}");
        assert!(text.contains("Sub-section: Detail"));
        assert!(!text.contains("Section: Sub"));
    }
}
