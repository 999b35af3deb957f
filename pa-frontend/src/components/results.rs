use std::fmt;

use leptos::*;

use pa_boundary::ProblemSummary;

use crate::tag::display_tags;

/// What the status line above the result grid currently says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Searching,
    Found { total: u64, shown: usize },
    Failed,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Searching => f.write_str("Searching..."),
            Self::Found { total, shown } => {
                write!(f, "Found {total} result(s). Showing {shown}.")
            }
            Self::Failed => f.write_str("Search failed. Check the server log."),
        }
    }
}

#[component]
pub fn ResultsGrid(
    results: RwSignal<Vec<ProblemSummary>>,
    status: RwSignal<SearchStatus>,
) -> impl IntoView {
    view! {
      <section>
        <p class="mb-2 text-sm text-gray-500">{ move || status.get().to_string() }</p>
        { move || {
            let problems = results.get();
            if problems.is_empty() {
                // The placeholder only appears after a search came back
                // empty, not while searching and not after a failure.
                matches!(status.get(), SearchStatus::Found { .. })
                    .then(|| view! {
                      <p class="text-sm text-gray-500">"No results. Try different tags."</p>
                    })
                    .into_view()
            } else {
                view! {
                  <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                      each = move || problems.clone()
                      key = |problem| problem.id.clone()
                      children = move |problem| view! { <ResultCard problem /> }
                    />
                  </div>
                }.into_view()
            }
        }}
      </section>
    }
}

/// Heading line of a card; either part may be missing.
fn card_heading(id: &str, title: &str) -> String {
    format!("{id} {title}").trim().to_string()
}

fn card_meta(source: Option<&str>, difficulty: Option<&str>) -> String {
    format!(
        "{} · difficulty {}",
        source.filter(|source| !source.is_empty()).unwrap_or("unknown"),
        difficulty
            .filter(|difficulty| !difficulty.is_empty())
            .unwrap_or("?"),
    )
}

#[component]
fn ResultCard(problem: ProblemSummary) -> impl IntoView {
    let ProblemSummary {
        id,
        title,
        url,
        source,
        difficulty,
        tags,
    } = problem;

    let heading = card_heading(&id, &title);
    let meta = card_meta(source.as_deref(), difficulty.as_deref());
    let url = url.filter(|url| !url.is_empty());
    let badges = display_tags(&tags);

    view! {
      <article class="p-4 bg-white border border-solid border-gray-200 rounded shadow-sm">
        <h3 class="font-semibold text-gray-900">{ heading }</h3>
        { match url {
            Some(url) => view! {
              <a
                class="text-sm text-blue-600 hover:underline"
                href=url
                target="_blank"
                rel="noopener noreferrer"
              >
                "Open problem"
              </a>
            }.into_view(),
            None => view! {
              <a class="text-sm text-gray-400" href="#">"No link"</a>
            }.into_view(),
        }}
        <p class="mt-1 text-xs text-gray-500">{ meta }</p>
        <div class="mt-2 flex flex-wrap gap-1">
          { badges
              .into_iter()
              .map(|tag| view! {
                <span class="text-xs bg-gray-100 text-gray-500 rounded px-2 py-0.5">{ tag }</span>
              })
              .collect_view()
          }
        </div>
      </article>
    }
}
