// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

/// Titles longer than this are cut in list output.
const LIST_TITLE_WIDTH: usize = 31;

/// Print an error message in red
pub fn print_error(message: &str) {
    eprintln!("{RED}✗{RESET} {}", message);
}

/// Print a push-in-progress message
pub fn print_pushing_branch(branch: &str, remote: &str) {
    println!("{CYAN}→{RESET} Pushing {BOLD}{}{RESET} to {}...", branch, remote);
}

/// Print confirmation for a newly created PR
pub fn print_pr_created(number: u64, url: &str) {
    println!("{GREEN}✓{RESET} Created pull request {BOLD}#{}{RESET}: {}", number, url);
}

/// Print confirmation for an updated PR
pub fn print_pr_updated(number: u64, url: &str) {
    println!("{GREEN}✓{RESET} Updated pull request {BOLD}#{}{RESET}: {}", number, url);
}

/// Print the URL being handed to the browser
pub fn print_opening(url: &str) {
    println!("{CYAN}→{RESET} Opening {}", url);
}

/// Print one line of `prq list` output
pub fn print_pr_line(index: usize, title: &str) {
    println!("{}", format_pr_line(index, title));
}

/// Format one list line: index, tab, title cut to a fixed width.
pub fn format_pr_line(index: usize, title: &str) -> String {
    let cut: String = title.chars().take(LIST_TITLE_WIDTH).collect();
    format!("{})\t{}...", index, cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pr_line_short_title() {
        assert_eq!(format_pr_line(0, "Add login"), "0)\tAdd login...");
    }

    #[test]
    fn test_format_pr_line_truncates_to_31_chars() {
        let title = "This pull request title is much longer than the cut";
        let line = format_pr_line(2, title);
        let rendered = line.strip_prefix("2)\t").unwrap();
        let cut = rendered.strip_suffix("...").unwrap();
        assert_eq!(cut.chars().count(), 31);
        assert!(title.starts_with(cut));
    }

    #[test]
    fn test_format_pr_line_multibyte_title() {
        let title = "ウィジェットのログインフォームを追加して検証を行う";
        let line = format_pr_line(1, title);
        assert!(line.ends_with("..."));
        let cut = line.strip_prefix("1)\t").unwrap().strip_suffix("...").unwrap();
        assert!(cut.chars().count() <= 31);
    }
}
