use leptos::*;

/// Transient notifications emitted by the forms. Fire-and-forget: nothing
/// consumes a result from showing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarMessage {
    LoginSuccess,
    ProfileUpdated,
}

impl SnackbarMessage {
    pub fn text(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "로그인되었습니다.",
            Self::ProfileUpdated => "프로필이 변경되었습니다.",
        }
    }
}

type SnackbarContext = (
    ReadSignal<Option<SnackbarMessage>>,
    WriteSignal<Option<SnackbarMessage>>,
);

#[component]
pub fn SnackbarProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(None::<SnackbarMessage>);
    provide_context::<SnackbarContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_snackbar() -> SnackbarContext {
    use_context::<SnackbarContext>().unwrap_or_else(|| create_signal(None))
}
