use leptos::*;

/// Runs `f` inside a fresh reactive runtime with resource fetchers
/// suppressed, so view models that own a resource stay deterministic under
/// test. The runtime is disposed afterwards either way.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    leptos_reactive::suppress_resource_load(true);
    let result = f();
    leptos_reactive::suppress_resource_load(false);
    runtime.dispose();
    result
}

/// Renders a view to its SSR HTML string for content assertions.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
