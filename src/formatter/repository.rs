use crate::types::Repo;

use super::MarkdownContent;

/// Format a repository value object into a markdown body
///
/// Renders the repository name as the heading followed by `URL` and
/// `Description` sections, so every field of the value object appears in
/// the output.
pub fn repository_body_markdown(repo: &Repo) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!("# {} (id: {})\n\n", repo.name(), repo.id()));

    content.push_str("## URL\n");
    content.push_str(&format!("{}\n", repo.url()));
    content.push('\n');

    content.push_str("## Description\n");
    content.push_str(&format!("{}\n", repo.description()));

    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_body_markdown_contains_all_fields() {
        let repo = Repo::new(
            1,
            "joos",
            "Java Objects On Steroids",
            "https://github.com/guddy31/joos",
        );

        let result = repository_body_markdown(&repo);
        let markdown = result.as_str();

        assert!(markdown.contains("# joos (id: 1)"));
        assert!(markdown.contains("## URL\nhttps://github.com/guddy31/joos\n"));
        assert!(markdown.contains("## Description\nJava Objects On Steroids\n"));
    }

    #[test]
    fn test_repository_body_markdown_empty_fields() {
        let repo = Repo::new(0, "", "", "");

        let result = repository_body_markdown(&repo);
        let markdown = result.as_str();

        // Section headers stay in place even when the fields are empty
        assert!(markdown.contains("## URL\n"));
        assert!(markdown.contains("## Description\n"));
    }
}
