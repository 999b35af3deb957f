use leptos::*;

use pa_boundary::HealthResponse;
use pa_frontend_api::PublicApi;

/// Footer line with the archive's size and data-set age.
///
/// Fetched once at startup. The footer is not an error surface: if the
/// health endpoint is unreachable the line simply stays hidden.
#[component]
pub fn ArchiveHealth(api: PublicApi) -> impl IntoView {
    let health = RwSignal::new(None::<HealthResponse>);

    let fetch_health = Action::new(move |()| {
        let api = api.clone();
        async move {
            match api.health().await {
                Ok(response) => health.set(Some(response)),
                Err(err) => log::warn!("Unable to fetch archive health: {err}"),
            }
        }
    });

    fetch_health.dispatch(());

    move || {
        health.get().map(|info| {
            view! {
              <footer class="mt-8 pt-2 text-xs text-gray-400 border-t border-solid border-gray-200">
                { footer_line(&info) }
              </footer>
            }
        })
    }
}

fn footer_line(health: &HealthResponse) -> String {
    let mut line = format!("{} problems", health.problems);
    if let Some(updated_at) = health
        .updated_at
        .as_deref()
        .filter(|updated_at| !updated_at.is_empty())
    {
        line = format!("{line} · updated {updated_at}");
    }
    line
}
