//! Notebook lookup for quick-link paths

use std::collections::HashMap;

use crate::model::Notebook;

#[derive(Debug, Clone)]
struct IndexedNotebook {
    parent_id: String,
    title: String,
}

/// Notebooks by id, nested ones included
#[derive(Debug, Clone, Default)]
pub struct NotebookIndex {
    notebooks: HashMap<String, IndexedNotebook>,
}

impl NotebookIndex {
    /// Index a notebook listing and every nested notebook
    pub fn build(roots: &[Notebook]) -> Self {
        let mut notebooks = HashMap::new();
        let mut pending: Vec<&Notebook> = roots.iter().collect();

        while let Some(notebook) = pending.pop() {
            notebooks.insert(
                notebook.id.clone(),
                IndexedNotebook {
                    parent_id: notebook.parent_id.clone(),
                    title: notebook.title.clone(),
                },
            );
            pending.extend(notebook.children.iter());
        }

        Self { notebooks }
    }

    /// Number of indexed notebooks
    pub fn len(&self) -> usize {
        self.notebooks.len()
    }

    /// Whether nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.notebooks.is_empty()
    }

    /// Path of the notebook `parent_id`, e.g. `/Work/Projects`
    ///
    /// Unknown ids end the walk, so a note in an unindexed notebook gets an
    /// empty path. A parent cycle is cut after visiting every notebook once.
    pub fn path_of(&self, parent_id: &str) -> String {
        let mut segments = Vec::new();
        let mut current = parent_id;

        while let Some(notebook) = self.notebooks.get(current) {
            if segments.len() >= self.notebooks.len() {
                break;
            }
            segments.push(notebook.title.as_str());
            current = &notebook.parent_id;
        }

        segments.iter().rev().fold(String::new(), |mut path, title| {
            path.push('/');
            path.push_str(title);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook(id: &str, parent_id: &str, title: &str, children: Vec<Notebook>) -> Notebook {
        Notebook {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            title: title.to_string(),
            children,
        }
    }

    #[test]
    fn test_nested_paths() {
        let roots = vec![
            notebook(
                "work",
                "",
                "Work",
                vec![notebook("proj", "work", "Projects", vec![])],
            ),
            notebook("home", "", "Home", vec![]),
        ];
        let index = NotebookIndex::build(&roots);

        assert_eq!(index.len(), 3);
        assert_eq!(index.path_of("proj"), "/Work/Projects");
        assert_eq!(index.path_of("home"), "/Home");
        assert_eq!(index.path_of("missing"), "");
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let roots = vec![
            notebook("a", "b", "A", vec![]),
            notebook("b", "a", "B", vec![]),
        ];
        let index = NotebookIndex::build(&roots);
        assert_eq!(index.path_of("a"), "/B/A");
    }
}
