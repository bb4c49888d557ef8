use shared::{Exercise, Person, PersonResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod tree;

use components::{ExerciseList, PersonPanel, StatusBar, TreeView};
use hooks::use_tree::use_tree;
use services::api::ApiClient;

/// Unsaved record placed under `parent`
fn new_person(parent: i64) -> PersonResponse {
    PersonResponse {
        person: Person {
            parent: Some(parent),
            ..Person::default()
        },
        label: String::new(),
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let tree = use_tree(&api_client);
    let selected = use_state(|| Option::<PersonResponse>::None);
    // The selection is an unsaved record rather than a stored person
    let creating = use_state(|| false);
    let exercises = use_state(Vec::<Exercise>::new);
    let message = use_state(|| Option::<String>::None);

    let load_exercises = {
        let api_client = api_client.clone();
        let exercises = exercises.clone();
        let message = message.clone();
        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let exercises = exercises.clone();
            let message = message.clone();
            spawn_local(async move {
                match api_client.list_exercises().await {
                    Ok(list) => exercises.set(list),
                    Err(e) => {
                        gloo::console::error!("Failed to load exercises:", e.clone());
                        message.set(Some(e));
                    }
                }
            });
        })
    };

    {
        let load_exercises = load_exercises.clone();
        use_effect_with((), move |_| {
            load_exercises.emit(());
            || ()
        });
    }

    let on_select = {
        let api_client = api_client.clone();
        let selected = selected.clone();
        let creating = creating.clone();
        let message = message.clone();
        Callback::from(move |link: String| {
            let api_client = api_client.clone();
            let selected = selected.clone();
            let creating = creating.clone();
            let message = message.clone();
            spawn_local(async move {
                match api_client.get_person(&link).await {
                    Ok(person) => {
                        creating.set(false);
                        selected.set(Some(person));
                        message.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to load person:", e.clone());
                        message.set(Some(e));
                    }
                }
            });
        })
    };

    let on_new = {
        let selected = selected.clone();
        let creating = creating.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            // New persons go below the stored selection, or below the root person
            let parent = match (*creating, selected.as_ref()) {
                (false, Some(current)) => current.person.id,
                _ => 0,
            };
            message.set(None);
            creating.set(true);
            selected.set(Some(new_person(parent)));
        })
    };

    let on_save = {
        let api_client = api_client.clone();
        let reload = tree.actions.reload.clone();
        let selected = selected.clone();
        let creating = creating.clone();
        let message = message.clone();
        Callback::from(move |person: Person| {
            let api_client = api_client.clone();
            let reload = reload.clone();
            let selected = selected.clone();
            let creating = creating.clone();
            let message = message.clone();
            let is_new = *creating;
            spawn_local(async move {
                let saved = if is_new {
                    api_client.create_person(&person).await
                } else {
                    match api_client.update_person(person.id, &person).await {
                        Ok(()) => api_client.get_person(&format!("/person/{}", person.id)).await,
                        Err(e) => Err(e),
                    }
                };

                match saved {
                    Ok(response) => {
                        message.set(Some(format!("Saved {}", response.label)));
                        creating.set(false);
                        selected.set(Some(response));
                        reload.emit(());
                    }
                    Err(e) => message.set(Some(e)),
                }
            });
        })
    };

    let on_delete = {
        let api_client = api_client.clone();
        let reload = tree.actions.reload.clone();
        let selected = selected.clone();
        let creating = creating.clone();
        let message = message.clone();
        Callback::from(move |id: i64| {
            let api_client = api_client.clone();
            let reload = reload.clone();
            let selected = selected.clone();
            let creating = creating.clone();
            let message = message.clone();
            spawn_local(async move {
                match api_client.delete_person(id).await {
                    Ok(()) => {
                        selected.set(None);
                        creating.set(false);
                        message.set(Some(format!("Deleted person {}", id)));
                        reload.emit(());
                    }
                    Err(e) => message.set(Some(e)),
                }
            });
        })
    };

    let on_error = {
        let message = message.clone();
        Callback::from(move |e: String| message.set(Some(e)))
    };

    let on_reset = {
        let api_client = api_client.clone();
        let reload = tree.actions.reload.clone();
        let load_exercises = load_exercises.clone();
        let selected = selected.clone();
        let creating = creating.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            let api_client = api_client.clone();
            let reload = reload.clone();
            let load_exercises = load_exercises.clone();
            let selected = selected.clone();
            let creating = creating.clone();
            let message = message.clone();
            spawn_local(async move {
                match api_client.reset_people().await {
                    Ok(()) => {
                        selected.set(None);
                        creating.set(false);
                        message.set(Some("Demo data restored".to_string()));
                        reload.emit(());
                        load_exercises.emit(());
                    }
                    Err(e) => message.set(Some(e)),
                }
            });
        })
    };

    // Tree load failures take precedence over page messages
    let status = tree
        .tree
        .status()
        .map(str::to_string)
        .or_else(|| (*message).clone());

    html! {
        <div class="app">
            <header class="header">
                <h1>{"People"}</h1>
                <div class="header-buttons">
                    <button class="new" onclick={on_new}>{"New person"}</button>
                    <button class="reset" onclick={on_reset}>{"Reset data"}</button>
                </div>
            </header>
            <StatusBar message={status} />
            <main class="content">
                <TreeView
                    tree={tree.tree.clone()}
                    on_toggle={tree.actions.toggle.clone()}
                    on_select={on_select}
                />
                <PersonPanel
                    person={(*selected).clone()}
                    is_new={*creating}
                    {on_save}
                    {on_delete}
                    {on_error}
                />
                <ExerciseList exercises={(*exercises).clone()} />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
