use yew::prelude::*;

use crate::tree::{Expansion, RootState, TreeNode, TreeState};

#[derive(Properties, PartialEq)]
pub struct TreeViewProps {
    pub tree: TreeState,
    pub on_toggle: Callback<String>,
    /// Receives the node's link when its label is clicked
    pub on_select: Callback<String>,
}

fn toggle_glyph(expansion: Expansion) -> &'static str {
    match expansion {
        Expansion::Leaf => "•",
        Expansion::Collapsed | Expansion::Closed => "▸",
        Expansion::Loading => "…",
        Expansion::Expanded => "▾",
    }
}

fn render_node(tree: &TreeState, node: &TreeNode, props: &TreeViewProps) -> Html {
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = node.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let on_select = {
        let on_select = props.on_select.clone();
        let link = node.link.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(link.clone());
        })
    };

    let class = classes!(
        "tree-node",
        match node.expansion {
            Expansion::Leaf => "leaf",
            Expansion::Collapsed => "collapsed",
            Expansion::Loading => "loading",
            Expansion::Expanded => "expanded",
            Expansion::Closed => "closed",
        }
    );

    html! {
        <li key={node.id.clone()} class={class}>
            <button class="tree-toggle" onclick={on_toggle} disabled={node.expansion == Expansion::Loading}>
                {toggle_glyph(node.expansion)}
            </button>
            <a href={node.link.clone()} onclick={on_select}>{&node.label}</a>
            {if node.shows_placeholder() {
                html! {
                    <ul class="tree-children placeholder" hidden={node.expansion != Expansion::Loading}>
                        <li class="tree-placeholder">{"Loading..."}</li>
                    </ul>
                }
            } else if node.shows_children() {
                html! {
                    <ul class="tree-children">
                        {for tree.children(node).map(|child| render_node(tree, child, props))}
                    </ul>
                }
            } else {
                html! {}
            }}
        </li>
    }
}

/// Person hierarchy; each level is fetched the first time it is opened
#[function_component(TreeView)]
pub fn tree_view(props: &TreeViewProps) -> Html {
    let tree = &props.tree;

    html! {
        <nav class="tree-view">
            {match tree.root_state() {
                RootState::Loading => html! { <p class="tree-loading">{"Loading..."}</p> },
                RootState::Idle => html! {},
                RootState::Loaded => html! {
                    <ul class="tree-root">
                        {for tree.roots().map(|node| render_node(tree, node, props))}
                    </ul>
                },
            }}
        </nav>
    }
}
