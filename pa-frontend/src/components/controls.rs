use leptos::{ev, *};

/// Search inputs: tag list, free-text query, match mode and result limit.
///
/// The inputs only mirror their signals; running a search is left to the
/// `on_search` callback so that tag chips and the button share one path.
#[component]
pub fn SearchControls<F>(
    tags_input: RwSignal<String>,
    text_input: RwSignal<String>,
    mode: RwSignal<String>,
    limit: RwSignal<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    view! {
      <section class="mb-6 flex flex-wrap items-center gap-2">
        <input
          type = "text"
          placeholder = "Tags, comma separated"
          class = "grow basis-64 px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-blue-600 focus:outline-none"
          prop:value = move || tags_input.get()
          on:keyup = move |ev: ev::KeyboardEvent| {
            match &*ev.key() {
                "Enter" => {
                  on_search();
                }
                _=> {
                  let val = event_target_value(&ev);
                  tags_input.update(|v|*v = val);
                }
            }
          }
          // The `change` event fires when the browser fills the form automatically,
          on:change = move |ev| {
            let val = event_target_value(&ev);
            tags_input.update(|v|*v = val);
          }
        />
        <input
          type = "text"
          placeholder = "Free text, e.g. title or id"
          class = "grow basis-64 px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-blue-600 focus:outline-none"
          prop:value = move || text_input.get()
          on:keyup = move |ev: ev::KeyboardEvent| {
            match &*ev.key() {
                "Enter" => {
                  on_search();
                }
                _=> {
                  let val = event_target_value(&ev);
                  text_input.update(|v|*v = val);
                }
            }
          }
          on:change = move |ev| {
            let val = event_target_value(&ev);
            text_input.update(|v|*v = val);
          }
        />
        <select
          class = "px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-blue-600 focus:outline-none"
          on:change = move |ev| {
            let val = event_target_value(&ev);
            mode.update(|v|*v = val);
          }
        >
          <option value="all" prop:selected = move || mode.get() == "all">"All tags"</option>
          <option value="any" prop:selected = move || mode.get() == "any">"Any tag"</option>
        </select>
        <input
          type = "number"
          min = "1"
          placeholder = "Limit"
          class = "w-24 px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-blue-600 focus:outline-none"
          prop:value = move || limit.get()
          on:keyup = move |ev: ev::KeyboardEvent| {
            let val = event_target_value(&ev);
            limit.update(|v|*v = val);
          }
          on:change = move |ev| {
            let val = event_target_value(&ev);
            limit.update(|v|*v = val);
          }
        />
        <button
          class = "px-6 py-2 font-medium text-xs leading-tight uppercase rounded shadow-md text-white bg-blue-600 hover:bg-blue-700 hover:shadow-lg focus:outline-none"
          on:click = move |_| on_search()
        >
          "Search"
        </button>
      </section>
    }
}
