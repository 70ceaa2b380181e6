use entity::prelude::*;

/// What the prompt list currently shows: a search text and, optionally, a
/// single project.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    query: String,
    project_id: Option<i32>,
}

impl Filter {
    pub fn new(query: &str, project_id: Option<i32>) -> Self {
        Self {
            query: query.to_lowercase(),
            project_id,
        }
    }

    /// The query must appear in the title, the content or one of the tags,
    /// ignoring case. With a project selected, unassigned prompts never
    /// match.
    pub fn matches(&self, prompt: &PromptEntity) -> bool {
        let matches_project = match self.project_id {
            Some(id) => prompt.project_id == Some(id),
            None => true,
        };

        matches_project && prompt.mentions(&self.query)
    }

    pub fn apply<'a>(
        &self,
        prompts: &'a [PromptEntity],
    ) -> Vec<&'a PromptEntity> {
        prompts.iter().filter(|prompt| self.matches(prompt)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(
        id: i32,
        title: &str,
        content: &str,
        tags: &[&str],
        project_id: Option<i32>,
    ) -> PromptEntity {
        PromptEntity {
            id,
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            project_id,
            ..Default::default()
        }
    }

    fn ids(prompts: Vec<&PromptEntity>) -> Vec<i32> {
        prompts.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn query_matches_title_or_content_ignoring_case() {
        let prompts = vec![
            prompt(1, "Foo", "bar", &["x"], None),
            prompt(2, "Baz", "Foo inside", &[], None),
        ];

        assert_eq!(ids(Filter::new("foo", None).apply(&prompts)), vec![1, 2]);
    }

    #[test]
    fn query_matches_any_tag() {
        let prompts = vec![
            prompt(1, "a", "b", &["Email", "Work"], None),
            prompt(2, "c", "d", &["home"], None),
        ];

        assert_eq!(ids(Filter::new("WOR", None).apply(&prompts)), vec![1]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let prompts = vec![
            prompt(1, "", "", &[], None),
            prompt(2, "t", "c", &["x"], Some(4)),
        ];

        assert_eq!(ids(Filter::default().apply(&prompts)), vec![1, 2]);
    }

    #[test]
    fn selected_project_excludes_unassigned_and_other_projects() {
        let prompts = vec![
            prompt(1, "foo", "", &[], None),
            prompt(2, "foo", "", &[], Some(7)),
            prompt(3, "foo", "", &[], Some(8)),
        ];

        assert_eq!(ids(Filter::new("", Some(7)).apply(&prompts)), vec![2]);
        assert_eq!(ids(Filter::new("foo", Some(7)).apply(&prompts)), vec![2]);
    }

    #[test]
    fn project_and_query_must_both_match() {
        let prompts = vec![
            prompt(1, "alpha", "", &[], Some(7)),
            prompt(2, "beta", "", &[], Some(7)),
        ];

        assert_eq!(ids(Filter::new("beta", Some(7)).apply(&prompts)), vec![2]);
        assert!(Filter::new("gamma", Some(7)).apply(&prompts).is_empty());
    }
}
