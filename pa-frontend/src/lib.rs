use leptos::*;

use pa_boundary::ProblemSummary;
use pa_frontend_api::{PublicApi, SearchQuery};

mod components;
use components::*;

mod config;
mod tag;
mod util;

use config::PageConfig;
use tag::append_to_tag_list;
use util::RequestSeq;

/// Match mode used when the host page does not configure one.
const DEFAULT_MATCH_MODE: &str = "all";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- init API -- //

    let page_config = PageConfig::load();
    let public_api = PublicApi::new(page_config.api_root());

    // -- signals -- //

    let tags_input = RwSignal::new(String::new());
    let text_input = RwSignal::new(String::new());
    let mode = RwSignal::new(
        page_config
            .initial_mode()
            .unwrap_or(DEFAULT_MATCH_MODE)
            .to_string(),
    );
    let limit = RwSignal::new(
        page_config
            .initial_limit()
            .map(|limit| limit.to_string())
            .unwrap_or_default(),
    );
    let results = RwSignal::new(Vec::<ProblemSummary>::new());
    let status = RwSignal::new(SearchStatus::Idle);
    let search_seq = RwSignal::new(RequestSeq::default());

    // -- actions -- //

    let search = {
        let api = public_api.clone();
        Action::new(move |()| {
            status.set(SearchStatus::Searching);
            let token = search_seq.get_untracked().next();
            search_seq.set_untracked(token);
            let api = api.clone();
            let query = SearchQuery {
                tags: non_empty(tags_input.get_untracked()),
                text: non_empty(text_input.get_untracked()),
                mode: non_empty(mode.get_untracked()),
                limit: limit.get_untracked().trim().parse().ok(),
            };
            async move {
                let result = api.search(&query).await;
                if search_seq.get_untracked() != token {
                    log::debug!("Discard stale search response");
                    return;
                }
                match result {
                    Ok(response) => {
                        status.set(SearchStatus::Found {
                            total: response.count,
                            shown: response.data.len(),
                        });
                        results.set(response.data);
                    }
                    Err(err) => {
                        log::warn!("Search failed: {err}");
                        results.set(vec![]);
                        status.set(SearchStatus::Failed);
                    }
                }
            }
        })
    };

    // -- callbacks -- //

    let on_search = move || {
        search.dispatch(());
    };

    let on_pick_tag = move |tag: String| {
        tags_input.update(|input| *input = append_to_tag_list(input, &tag));
        search.dispatch(());
    };

    // -- init -- //

    search.dispatch(());

    view! {
      <div class="container max-w-5xl p-6 mx-auto">
        <header class="mb-6">
          <h1 class="text-2xl font-bold text-gray-900">"Problem Archive"</h1>
          <p class="text-sm text-gray-500">"Search practice problems by tag or free text."</p>
        </header>
        <SearchControls tags_input text_input mode limit on_search />
        <TagCloud api = public_api.clone() on_pick = on_pick_tag />
        <ResultsGrid results status />
        <ArchiveHealth api = public_api />
      </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
