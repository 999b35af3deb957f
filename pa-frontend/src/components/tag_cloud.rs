use leptos::*;

use pa_boundary::TagCount;
use pa_frontend_api::PublicApi;

use crate::{tag::normalize_tag_display, util::RequestSeq};

/// How many of the server's tags are offered as chips.
const MAX_CHIPS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagCloudState {
    Loading,
    Ready(Vec<TagChip>),
    Unavailable,
}

/// One clickable chip: the label that is shown and the display tag that
/// is handed to `on_pick` when the chip is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TagChip {
    label: String,
    tag: String,
}

/// The server returns tags ordered by usage; only the first [`MAX_CHIPS`]
/// entries are turned into chips, minus those that are suppressed.
fn build_chips(data: &[TagCount]) -> Vec<TagChip> {
    data.iter()
        .take(MAX_CHIPS)
        .filter_map(|entry| {
            normalize_tag_display(&entry.tag).map(|display| TagChip {
                label: format!("{display} ({})", entry.count),
                tag: display.to_string(),
            })
        })
        .collect()
}

#[component]
pub fn TagCloud<F>(api: PublicApi, on_pick: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    // -- signals -- //

    let state = RwSignal::new(TagCloudState::Loading);
    let fetch_seq = RwSignal::new(RequestSeq::default());

    // -- actions -- //

    let fetch_tags = Action::new(move |()| {
        state.set(TagCloudState::Loading);
        let token = fetch_seq.get_untracked().next();
        fetch_seq.set_untracked(token);
        let api = api.clone();
        async move {
            let result = api.tags().await;
            if fetch_seq.get_untracked() != token {
                log::debug!("Discard stale tag response");
                return;
            }
            match result {
                Ok(response) => {
                    state.set(TagCloudState::Ready(build_chips(&response.data)));
                }
                Err(err) => {
                    log::warn!("Unable to fetch tags: {err}");
                    state.set(TagCloudState::Unavailable);
                }
            }
        }
    });

    // -- init -- //

    fetch_tags.dispatch(());

    view! {
      <section class="mb-6">
        <div class="mb-2 flex items-center justify-between">
          <h2 class="font-semibold text-gray-700">"Popular tags"</h2>
          <button
            class = "px-2 py-1 text-xs text-gray-600 border border-solid border-gray-300 rounded hover:bg-gray-100 focus:outline-none"
            on:click = move |_| fetch_tags.dispatch(())
          >
            "Refresh"
          </button>
        </div>
        <div class="flex flex-wrap gap-2">
          { move || match state.get() {
              TagCloudState::Loading => view! {
                <span class="text-sm text-gray-500">"Loading tags..."</span>
              }.into_view(),
              TagCloudState::Unavailable => view! {
                <span class="text-sm text-gray-500">"Tag list unavailable."</span>
              }.into_view(),
              TagCloudState::Ready(chips) => view! {
                <For
                  each = move || chips.clone()
                  key = |chip| chip.tag.clone()
                  children = move |chip| view! { <TagChipButton chip on_pick /> }
                />
              }.into_view(),
          }}
        </div>
      </section>
    }
}

#[component]
fn TagChipButton<F>(chip: TagChip, on_pick: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let TagChip { label, tag } = chip;
    view! {
      <button
        class = "text-xs bg-gray-100 text-gray-600 rounded-full px-3 py-1 hover:bg-gray-200 focus:outline-none"
        on:click = move |_| on_pick(tag.clone())
      >
        { label }
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_count(tag: &str, count: u64) -> TagCount {
        TagCount {
            tag: tag.to_string(),
            count,
        }
    }

    #[test]
    fn chips_carry_display_names_and_counts() {
        let data = vec![
            tag_count("L2-graphs", 12),
            tag_count("I42", 99),
            tag_count("dp", 7),
        ];
        let chips = build_chips(&data);
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].label, "graphs (12)");
        assert_eq!(chips[0].tag, "graphs");
        assert_eq!(chips[1].label, "dp (7)");
        assert_eq!(chips[1].tag, "dp");
    }

    #[test]
    fn chips_are_truncated_before_suppression() {
        let mut data: Vec<_> = (0..MAX_CHIPS)
            .map(|i| tag_count(&format!("tag-{i}"), 1))
            .collect();
        data.insert(0, tag_count("I1", 100));
        // The suppressed entry occupies one of the 30 slots, so the last
        // regular tag no longer makes the cut.
        let chips = build_chips(&data);
        assert_eq!(chips.len(), MAX_CHIPS - 1);
        assert_eq!(chips[0].tag, "tag-0");
        assert_eq!(chips.last().map(|chip| chip.tag.as_str()), Some("tag-28"));
    }
}
