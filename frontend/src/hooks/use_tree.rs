use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::tree::{TreeEvent, TreeState};

pub struct UseTreeResult {
    /// Snapshot of the tree for this render
    pub tree: TreeState,
    pub actions: UseTreeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTreeActions {
    pub toggle: Callback<String>,
    pub reload: Callback<()>,
}

/// Apply `event`, then send the children request it asks for (if any) and apply the outcome.
fn dispatch(
    api_client: &ApiClient,
    tree: &Rc<RefCell<TreeState>>,
    update: &UseForceUpdateHandle,
    event: TreeEvent,
) {
    let fetch = tree.borrow_mut().apply(event);
    update.force_update();

    let Some(fetch) = fetch else {
        return;
    };

    let api_client = api_client.clone();
    let tree = tree.clone();
    let update = update.clone();

    spawn_local(async move {
        let event = match api_client.fetch_nodes(&fetch.to_request()).await {
            Ok(response) => TreeEvent::ChildrenLoaded {
                request: fetch,
                nodes: response.result,
            },
            Err(message) => {
                gloo::console::error!("Failed to load nodes:", message.clone());
                TreeEvent::LoadFailed {
                    request: fetch,
                    message,
                }
            }
        };

        tree.borrow_mut().apply(event);
        update.force_update();
    });
}

#[hook]
pub fn use_tree(api_client: &ApiClient) -> UseTreeResult {
    let tree = use_mut_ref(TreeState::default);
    let update = use_force_update();

    // Root level is requested once, on first render
    {
        let api_client = api_client.clone();
        let tree = tree.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            dispatch(&api_client, &tree, &update, TreeEvent::Start);
            || ()
        });
    }

    let toggle = {
        let api_client = api_client.clone();
        let tree = tree.clone();
        let update = update.clone();
        use_callback((), move |id: String, _| {
            dispatch(&api_client, &tree, &update, TreeEvent::Toggle(id));
        })
    };

    let reload = {
        let api_client = api_client.clone();
        let tree = tree.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            dispatch(&api_client, &tree, &update, TreeEvent::Reload);
        })
    };

    let snapshot = tree.borrow().clone();

    UseTreeResult {
        tree: snapshot,
        actions: UseTreeActions { toggle, reload },
    }
}
