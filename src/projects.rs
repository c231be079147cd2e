use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::content::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Dashboard,
    Ui,
    Experiments,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Dashboard => "dashboard",
            Category::Ui => "ui",
            Category::Experiments => "experiments",
        }
    }
}

/// The project section's selected filter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    /// Filter buttons in display order.
    pub const ALL_TAGS: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Only(Category::Web),
        ProjectFilter::Only(Category::Dashboard),
        ProjectFilter::Only(Category::Ui),
        ProjectFilter::Only(Category::Experiments),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(c) => c.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == *c,
        }
    }

    /// Returns the projects selected by this filter, in source order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for ProjectFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s {
            "all" => ProjectFilter::All,
            "web" => ProjectFilter::Only(Category::Web),
            "dashboard" => ProjectFilter::Only(Category::Dashboard),
            "ui" => ProjectFilter::Only(Category::Ui),
            "experiments" => ProjectFilter::Only(Category::Experiments),
            other => return Err(CategoryParseError(other.to_string())),
        };
        Ok(filter)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &'static str, category: Category) -> Project {
        Project {
            title,
            category,
            tech: &[],
            description: "",
            image: None,
            link: "",
            repo: "",
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", Category::Web),
            project("b", Category::Dashboard),
            project("c", Category::Ui),
            project("d", Category::Dashboard),
        ]
    }

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_returns_full_list_in_order() {
        let projects = sample();
        let filtered = ProjectFilter::All.apply(&projects);
        assert_eq!(titles(&filtered), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_dashboard_filter() {
        let projects = sample();
        let filter: ProjectFilter = "dashboard".parse().unwrap();
        let filtered = filter.apply(&projects);
        assert_eq!(titles(&filtered), vec!["b", "d"]);
        // source is untouched
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].title, "a");
    }

    #[test]
    fn test_empty_category() {
        let projects = sample();
        let filtered = ProjectFilter::Only(Category::Experiments).apply(&projects);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_parse_roundtrip_and_unknown() {
        for tag in ProjectFilter::ALL_TAGS {
            assert_eq!(tag.to_string().parse::<ProjectFilter>(), Ok(tag));
        }
        assert_eq!(
            "mobile".parse::<ProjectFilter>(),
            Err(CategoryParseError("mobile".to_string()))
        );
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
    }
}
