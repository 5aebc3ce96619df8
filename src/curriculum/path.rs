//! Prerequisite-first learning path computation
//!
//! Depth-first, post-order walk of the prerequisite graph. The walk keeps an
//! explicit stack instead of recursing, and tracks which lessons are still
//! in progress so a cycle is reported instead of followed forever.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::CurriculumError;
use super::lesson::Lesson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Compute the learning path ending at `start`.
///
/// Prerequisites are visited in declared order and every lesson appears after
/// all of its prerequisites. Only ids present in `lessons` are emitted; an id
/// that is only referenced as a prerequisite is skipped along with anything it
/// would have required. An unknown `start` yields an empty path.
pub(super) fn learning_path<'a>(
    start: &'a str,
    lessons: &'a IndexMap<String, Lesson>,
    graph: &'a IndexMap<String, Vec<String>>,
) -> Result<Vec<String>, CurriculumError> {
    let mut path = Vec::new();
    if !lessons.contains_key(start) {
        tracing::debug!(lesson = start, "learning path requested for unknown lesson");
        return Ok(path);
    }

    let mut marks: HashMap<&'a str, Mark> = HashMap::new();
    // (lesson id, index of the next prerequisite to look at)
    let mut stack: Vec<(&'a str, usize)> = vec![(start, 0)];
    marks.insert(start, Mark::InProgress);

    while let Some(&(id, next)) = stack.last() {
        let Some(prereq) = edges(graph, id).get(next) else {
            stack.pop();
            marks.insert(id, Mark::Done);
            path.push(id.to_string());
            continue;
        };

        let top = stack.len() - 1;
        stack[top].1 += 1;
        let prereq = prereq.as_str();

        match marks.get(prereq) {
            Some(Mark::Done) => {}
            Some(Mark::InProgress) => {
                let from = stack.iter().position(|(s, _)| *s == prereq).unwrap_or(0);
                let mut cycle: Vec<String> =
                    stack[from..].iter().map(|(s, _)| s.to_string()).collect();
                cycle.push(prereq.to_string());
                return Err(CurriculumError::CycleDetected { cycle });
            }
            None if !lessons.contains_key(prereq) => {
                tracing::debug!(
                    lesson = id,
                    prerequisite = prereq,
                    "skipping unknown prerequisite"
                );
                marks.insert(prereq, Mark::Done);
            }
            None => {
                marks.insert(prereq, Mark::InProgress);
                stack.push((prereq, 0));
            }
        }
    }

    Ok(path)
}

fn edges<'a>(graph: &'a IndexMap<String, Vec<String>>, id: &str) -> &'a [String] {
    graph.get(id).map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Difficulty;

    type Graph = (IndexMap<String, Lesson>, IndexMap<String, Vec<String>>);

    fn graph_of(entries: &[(&str, &[&str])]) -> Graph {
        let mut lessons = IndexMap::new();
        let mut graph = IndexMap::new();
        for (id, prereqs) in entries {
            let lesson = Lesson::new(*id, *id, "Python", Difficulty::Beginner)
                .with_prerequisites(prereqs.iter().copied());
            graph.insert(id.to_string(), lesson.prerequisites.clone());
            lessons.insert(id.to_string(), lesson);
        }
        (lessons, graph)
    }

    #[test]
    fn test_diamond_emits_shared_prerequisite_once() {
        let (lessons, graph) = graph_of(&[("a", &[]), ("b", &["a"]), ("c", &["a", "b"])]);
        let path = learning_path("c", &lessons, &graph).unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prerequisites_follow_declared_order() {
        let (lessons, graph) = graph_of(&[("x", &[]), ("y", &[]), ("z", &["y", "x"])]);
        assert_eq!(learning_path("z", &lessons, &graph).unwrap(), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_unknown_prerequisite_is_omitted() {
        let (lessons, graph) = graph_of(&[("x", &["ghost"])]);
        assert_eq!(learning_path("x", &lessons, &graph).unwrap(), vec!["x"]);
    }

    #[test]
    fn test_unknown_start_is_empty() {
        let (lessons, graph) = graph_of(&[("x", &[])]);
        assert!(learning_path("nope", &lessons, &graph).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_is_reported() {
        let (lessons, graph) = graph_of(&[("a", &["c"]), ("b", &["a"]), ("c", &["b"])]);
        let err = learning_path("a", &lessons, &graph).unwrap_err();
        match err {
            CurriculumError::CycleDetected { cycle } => {
                assert_eq!(cycle, vec!["a", "c", "b", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let (lessons, graph) = graph_of(&[("loop", &["loop"])]);
        assert!(matches!(
            learning_path("loop", &lessons, &graph),
            Err(CurriculumError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let ids: Vec<String> = (0..20_000).map(|i| format!("l{i}")).collect();
        let mut lessons = IndexMap::new();
        let mut graph = IndexMap::new();
        for (i, id) in ids.iter().enumerate() {
            let prereqs: Vec<String> = if i == 0 { vec![] } else { vec![ids[i - 1].clone()] };
            lessons.insert(
                id.clone(),
                Lesson::new(id.clone(), id.clone(), "Python", Difficulty::Beginner),
            );
            graph.insert(id.clone(), prereqs);
        }

        let path = learning_path(&ids[ids.len() - 1], &lessons, &graph).unwrap();
        assert_eq!(path.len(), ids.len());
        assert_eq!(path[0], "l0");
    }
}
