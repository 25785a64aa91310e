use crate::types::User;

use super::MarkdownContent;

/// Format a user value object into a markdown body
pub fn user_body_markdown(user: &User) -> MarkdownContent {
    let mut content = String::new();

    content.push_str(&format!("# {} (id: {})\n\n", user.login(), user.id()));

    content.push_str("## Avatar\n");
    content.push_str(&format!("{}\n", user.avatar_url()));

    MarkdownContent(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_body_markdown_contains_all_fields() {
        let user = User::new(
            12,
            "Romain",
            "https://avatars2.githubusercontent.com/u/12625928?v=3&s=460",
        );

        let result = user_body_markdown(&user);
        let markdown = result.as_str();

        assert!(markdown.contains("# Romain (id: 12)"));
        assert!(
            markdown
                .contains("## Avatar\nhttps://avatars2.githubusercontent.com/u/12625928?v=3&s=460\n")
        );
    }
}
