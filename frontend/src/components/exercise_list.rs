use shared::Exercise;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExerciseListProps {
    pub exercises: Vec<Exercise>,
}

/// Day part of an RFC 3339 timestamp; anything else is shown as sent
fn day_of(date: &str) -> &str {
    date.split_once('T').map(|(day, _)| day).unwrap_or(date)
}

/// One-line summary of an activity, e.g. "running, 5 km in 30 min"
fn summary(exercise: &Exercise) -> String {
    let mut parts = vec![exercise.exercise_type.clone()];
    match (exercise.distance.trim(), exercise.duration.trim()) {
        ("", "") => {}
        (distance, "") => parts.push(distance.to_string()),
        ("", duration) => parts.push(duration.to_string()),
        (distance, duration) => parts.push(format!("{} in {}", distance, duration)),
    }
    parts.retain(|p| !p.is_empty());
    parts.join(", ")
}

#[function_component(ExerciseList)]
pub fn exercise_list(props: &ExerciseListProps) -> Html {
    html! {
        <section class="exercise-list">
            <h2>{"Activities"}</h2>
            {if props.exercises.is_empty() {
                html! { <p class="empty">{"No activities logged."}</p> }
            } else {
                html! {
                    <ul>
                        {for props.exercises.iter().map(|exercise| html! {
                            <li key={exercise.id.to_string()}>
                                <span class="exercise-date">{day_of(&exercise.date)}</span>
                                {" "}
                                <span class="exercise-summary">{summary(exercise)}</span>
                                {if exercise.comments.is_empty() {
                                    html! {}
                                } else {
                                    html! { <p class="exercise-comments">{&exercise.comments}</p> }
                                }}
                            </li>
                        })}
                    </ul>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(exercise_type: &str, distance: &str, duration: &str) -> Exercise {
        Exercise {
            id: 1,
            date: "2012-03-01T00:00:00+00:00".to_string(),
            exercise_type: exercise_type.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn test_day_of() {
        assert_eq!(day_of("2012-03-01T00:00:00+00:00"), "2012-03-01");
        assert_eq!(day_of("yesterday"), "yesterday");
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(&exercise("running", "5 km", "30 min")), "running, 5 km in 30 min");
        assert_eq!(summary(&exercise("swimming", "", "45 min")), "swimming, 45 min");
        assert_eq!(summary(&exercise("cycling", "", "")), "cycling");
        assert_eq!(summary(&exercise("", "10 km", "")), "10 km");
    }
}
