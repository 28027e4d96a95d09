//! Screen Routing
//!
//! The URL path selects the screen; the query string belongs to the list
//! screens and is handled by `url_state`.

use course_admin_core::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Courses,
    Categories,
    Sections,
    Lessons,
    Quizzes,
    Questions,
    Certificates,
    LiveClasses,
    Books,
    Support,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::Courses,
        ResourceKind::Categories,
        ResourceKind::Sections,
        ResourceKind::Lessons,
        ResourceKind::Quizzes,
        ResourceKind::Questions,
        ResourceKind::Certificates,
        ResourceKind::LiveClasses,
        ResourceKind::Books,
        ResourceKind::Support,
    ];

    /// First path segment of the screen
    pub fn segment(&self) -> &'static str {
        match self {
            ResourceKind::Courses => "courses",
            ResourceKind::Categories => "categories",
            ResourceKind::Sections => "sections",
            ResourceKind::Lessons => "lessons",
            ResourceKind::Quizzes => "quizzes",
            ResourceKind::Questions => "questions",
            ResourceKind::Certificates => "certificates",
            ResourceKind::LiveClasses => "live-classes",
            ResourceKind::Books => "books",
            ResourceKind::Support => "support",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            ResourceKind::Courses => "Courses",
            ResourceKind::Categories => "Categories",
            ResourceKind::Sections => "Sections",
            ResourceKind::Lessons => "Lessons",
            ResourceKind::Quizzes => "Quizzes",
            ResourceKind::Questions => "Questions",
            ResourceKind::Certificates => "Certificates",
            ResourceKind::LiveClasses => "Live classes",
            ResourceKind::Books => "Books",
            ResourceKind::Support => "Support",
        }
    }

    pub fn list_path(&self) -> String {
        format!("/{}", self.segment())
    }

    pub fn detail_path(&self, id: &str) -> String {
        format!("/{}/{}", self.segment(), id)
    }

    /// Row action menu entries: "Edit" opens the record screen, followed
    /// by the resource's own links.
    pub fn row_menu_links<R: Resource>(&self, id: &str) -> Vec<(&'static str, String)> {
        let mut links = vec![("Edit", self.detail_path(id))];
        links.extend(R::row_links(id));
        links
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.segment() == segment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List(ResourceKind),
    Detail(ResourceKind, String),
    QuestionBuilder { quiz_id: String },
    NotFound(String),
}

impl Route {
    pub fn parse(pathname: &str) -> Route {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::List(ResourceKind::Courses),
            ["quizzes", quiz_id, "questions", "new"] => Route::QuestionBuilder { quiz_id: quiz_id.to_string() },
            [segment] => match ResourceKind::from_segment(segment) {
                Some(kind) => Route::List(kind),
                None => Route::NotFound(pathname.to_string()),
            },
            [segment, id] => match ResourceKind::from_segment(segment) {
                Some(kind) => Route::Detail(kind, id.to_string()),
                None => Route::NotFound(pathname.to_string()),
            },
            _ => Route::NotFound(pathname.to_string()),
        }
    }

    /// Sidebar entry to highlight
    pub fn section(&self) -> Option<ResourceKind> {
        match self {
            Route::List(kind) | Route::Detail(kind, _) => Some(*kind),
            Route::QuestionBuilder { .. } => Some(ResourceKind::Quizzes),
            Route::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_admin_core::records::{Category, Quiz};

    #[test]
    fn test_parse_screens() {
        assert_eq!(Route::parse("/"), Route::List(ResourceKind::Courses));
        assert_eq!(Route::parse("/live-classes"), Route::List(ResourceKind::LiveClasses));
        assert_eq!(Route::parse("/courses/abc123/"), Route::Detail(ResourceKind::Courses, "abc123".into()));
        assert_eq!(
            Route::parse("/quizzes/q9/questions/new"),
            Route::QuestionBuilder { quiz_id: "q9".into() }
        );
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
    }

    #[test]
    fn test_paths_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(Route::parse(&kind.list_path()), Route::List(kind));
            assert_eq!(Route::parse(&kind.detail_path("x1")), Route::Detail(kind, "x1".into()));
        }
    }

    #[test]
    fn test_row_menu_starts_with_edit() {
        assert_eq!(
            ResourceKind::Categories.row_menu_links::<Category>("k1"),
            vec![("Edit", "/categories/k1".to_string())]
        );
        let quiz = ResourceKind::Quizzes.row_menu_links::<Quiz>("q9");
        assert_eq!(quiz[0], ("Edit", "/quizzes/q9".to_string()));
        assert!(quiz.contains(&("Add questions", "/quizzes/q9/questions/new".to_string())));
    }
}
