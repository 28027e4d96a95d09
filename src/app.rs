//! Course Admin App
//!
//! Sidebar plus one routed screen; toasts and the log drawer float above.

use leptos::prelude::*;

use course_admin_core::records::{
    Book, Category, Certificate, Course, Lesson, LiveClass, Quiz, QuizQuestion, Section, SupportRequest,
};
use course_admin_core::Resource;

use crate::components::{
    detail_screen, list_screen, CategoryDialog, DiagnosticsDrawer, NotFoundPanel, QuestionBuilderScreen, Sidebar,
    ToastStack,
};
use crate::context::AppContext;
use crate::routes::{ResourceKind, Route};
use crate::url_state::Location;

fn screen<R: Resource>(kind: ResourceKind, id: Option<String>) -> AnyView {
    match id {
        Some(id) => detail_screen::<R>(kind, id).into_any(),
        None => list_screen::<R>(kind).into_any(),
    }
}

fn resource_screen(kind: ResourceKind, id: Option<String>) -> AnyView {
    match kind {
        ResourceKind::Courses => screen::<Course>(kind, id),
        ResourceKind::Categories if id.is_none() => view! {
            <CategoryDialog />
            {list_screen::<Category>(kind)}
        }
        .into_any(),
        ResourceKind::Categories => screen::<Category>(kind, id),
        ResourceKind::Sections => screen::<Section>(kind, id),
        ResourceKind::Lessons => screen::<Lesson>(kind, id),
        ResourceKind::Quizzes => screen::<Quiz>(kind, id),
        ResourceKind::Questions => screen::<QuizQuestion>(kind, id),
        ResourceKind::Certificates => screen::<Certificate>(kind, id),
        ResourceKind::LiveClasses => screen::<LiveClass>(kind, id),
        ResourceKind::Books => screen::<Book>(kind, id),
        ResourceKind::Support => screen::<SupportRequest>(kind, id),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let location = Location::from_window();
    location.listen_popstate();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(location, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Query-only changes keep the current screen mounted
    let route = Memo::new(move |_| Route::parse(&location.path.get()));

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                {move || match route.get() {
                    Route::List(kind) => resource_screen(kind, None),
                    Route::Detail(kind, id) => resource_screen(kind, Some(id)),
                    Route::QuestionBuilder { quiz_id } => view! { <QuestionBuilderScreen quiz_id=quiz_id /> }.into_any(),
                    Route::NotFound(path) => {
                        log::warn!("no screen for {}", path);
                        view! {
                            <NotFoundPanel
                                message=format!("Nothing lives at {}", path)
                                back_href="/courses"
                                back_label="Back to Courses"
                            />
                        }
                        .into_any()
                    }
                }}
            </main>
            <ToastStack />
            <DiagnosticsDrawer />
        </div>
    }
}
