use shared::{Person, PersonResponse};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Editable copy of a person's fields, as typed into the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl PersonDraft {
    pub fn from_person(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            date_of_birth: person.date_of_birth.clone().unwrap_or_default(),
        }
    }

    /// Problems worth reporting before the request is sent.
    /// Birthdates in the future are left to the server, which knows today's date.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.first_name.trim().is_empty() {
            problems.push("First name cannot be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            problems.push("Last name cannot be empty".to_string());
        }
        problems
    }

    /// `base` with the edited fields applied; a blank birthdate means unknown
    pub fn apply_to(&self, base: &Person) -> Person {
        let date_of_birth = self.date_of_birth.trim();
        Person {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: (!date_of_birth.is_empty()).then(|| date_of_birth.to_string()),
            ..base.clone()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PersonPanelProps {
    pub person: Option<PersonResponse>,
    /// `person` is an unsaved record; the form opens straight away
    #[prop_or_default]
    pub is_new: bool,
    pub on_save: Callback<Person>,
    pub on_delete: Callback<i64>,
    /// Receives messages for the status region
    pub on_error: Callback<String>,
}

/// Details of the person last selected in the tree, with an edit form
#[function_component(PersonPanel)]
pub fn person_panel(props: &PersonPanelProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(PersonDraft::default);

    // Start over whenever a different record is shown
    use_effect_with((props.person.clone(), props.is_new), {
        let editing = editing.clone();
        let draft = draft.clone();
        move |(person, is_new): &(Option<PersonResponse>, bool)| {
            match person {
                Some(response) => {
                    draft.set(PersonDraft::from_person(&response.person));
                    editing.set(*is_new);
                }
                None => {
                    draft.set(PersonDraft::default());
                    editing.set(false);
                }
            }
            || ()
        }
    });

    let Some(response) = &props.person else {
        return html! {
            <section class="person-panel empty">{"Select a person to see details."}</section>
        };
    };
    let person = &response.person;

    let on_field = |set: fn(&mut PersonDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let base = person.clone();
        let on_save = props.on_save.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let problems = draft.problems();
            if !problems.is_empty() {
                on_error.emit(problems.join("; "));
                return;
            }
            on_save.emit(draft.apply_to(&base));
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let on_cancel = {
        let editing = editing.clone();
        let draft = draft.clone();
        let original = PersonDraft::from_person(person);
        Callback::from(move |_: MouseEvent| {
            draft.set(original.clone());
            editing.set(false);
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = person.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    if *editing {
        let is_new = props.is_new;
        return html! {
            <section class="person-panel editing">
                <h2>{if is_new { "New person".to_string() } else { response.label.clone() }}</h2>
                <form class="person-form" onsubmit={on_submit}>
                    <label for="first-name">{"First name"}</label>
                    <input
                        id="first-name"
                        type="text"
                        value={draft.first_name.clone()}
                        onchange={on_field(|d, v| d.first_name = v)}
                    />
                    <label for="last-name">{"Last name"}</label>
                    <input
                        id="last-name"
                        type="text"
                        value={draft.last_name.clone()}
                        onchange={on_field(|d, v| d.last_name = v)}
                    />
                    <label for="date-of-birth">{"Date of birth"}</label>
                    <input
                        id="date-of-birth"
                        type="date"
                        value={draft.date_of_birth.clone()}
                        onchange={on_field(|d, v| d.date_of_birth = v)}
                    />
                    <div class="person-form-buttons">
                        <button type="submit">{if is_new { "Create" } else { "Save" }}</button>
                        {if is_new {
                            html! {}
                        } else {
                            html! { <button type="button" onclick={on_cancel}>{"Cancel"}</button> }
                        }}
                    </div>
                </form>
            </section>
        };
    }

    html! {
        <section class="person-panel">
            <h2>{&response.label}</h2>
            <dl>
                <dt>{"Id"}</dt>
                <dd>{person.id}</dd>
                <dt>{"First name"}</dt>
                <dd>{&person.first_name}</dd>
                <dt>{"Last name"}</dt>
                <dd>{&person.last_name}</dd>
                <dt>{"Date of birth"}</dt>
                <dd>{person.date_of_birth.clone().unwrap_or_else(|| "unknown".to_string())}</dd>
            </dl>
            <div class="person-panel-buttons">
                <button onclick={on_edit}>{"Edit"}</button>
                <button class="delete" onclick={on_delete}>{"Delete"}</button>
            </div>
        </section>
    }
}
