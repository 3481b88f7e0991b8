//! @acp:module "Scaffolder"
//! @acp:summary "Create the intent/idea/task/subtask project skeleton"
//! @acp:domain scaffold
//! @acp:layer service
//!
//! The project name is used verbatim as the root directory name and inside
//! the generated documents. Directory creation is merge-safe; files are
//! overwritten. A failure part-way leaves whatever was already created.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use handlebars::Handlebars;
use serde_json::json;
use tracing::{debug, info};

use crate::error::Result;

const IDEAS_DIR: &str = "ideas";
const EXAMPLE_IDEA_DIR: &str = "example-idea";
const TASKS_DIR: &str = "tasks";
const EXAMPLE_TASK_DIR: &str = "example-task";
const SUBTASKS_DIR: &str = "subtasks";

const INTENT_FILE: &str = "INTENT.md";
const IDEA_FILE: &str = "IDEA.md";
const TASK_FILE: &str = "TASK.md";
const SUBTASK_FILE: &str = "subtask-1.md";

/// Paths making up a scaffolded project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub ideas: PathBuf,
    pub idea: PathBuf,
    pub task: PathBuf,
    pub subtasks: PathBuf,
}

impl ProjectLayout {
    /// Layout of project `name` under `base`
    pub fn new(name: &str, base: &Path) -> Self {
        let root = base.join(name);
        let ideas = root.join(IDEAS_DIR);
        let idea = ideas.join(EXAMPLE_IDEA_DIR);
        let task = idea.join(TASKS_DIR).join(EXAMPLE_TASK_DIR);
        let subtasks = task.join(SUBTASKS_DIR);

        Self {
            root,
            ideas,
            idea,
            task,
            subtasks,
        }
    }

    /// Directories, parents first
    pub fn directories(&self) -> [&Path; 5] {
        [
            self.root.as_path(),
            self.ideas.as_path(),
            self.idea.as_path(),
            self.task.as_path(),
            self.subtasks.as_path(),
        ]
    }

    pub fn intent_file(&self) -> PathBuf {
        self.root.join(INTENT_FILE)
    }

    pub fn idea_file(&self) -> PathBuf {
        self.idea.join(IDEA_FILE)
    }

    pub fn task_file(&self) -> PathBuf {
        self.task.join(TASK_FILE)
    }

    pub fn subtask_file(&self) -> PathBuf {
        self.subtasks.join(SUBTASK_FILE)
    }

    /// Generated documents
    pub fn files(&self) -> [PathBuf; 4] {
        [
            self.intent_file(),
            self.idea_file(),
            self.task_file(),
            self.subtask_file(),
        ]
    }
}

/// Renders and writes project skeletons
pub struct Scaffolder {
    registry: Handlebars<'static>,
    date: NaiveDate,
}

impl Scaffolder {
    /// Scaffolder stamping today's local date into the decision log
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, source) in templates::ALL {
            registry.register_template_string(name, source)?;
        }

        Ok(Self {
            registry,
            date: Local::now().date_naive(),
        })
    }

    /// Use a fixed decision log date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Create project `name` under `base`, returning the project root
    pub fn init_project(&self, name: &str, base: &Path) -> Result<PathBuf> {
        let layout = ProjectLayout::new(name, base);

        for dir in layout.directories() {
            fs::create_dir_all(dir)?;
            debug!("Ensured directory {:?}", dir);
        }

        let date = self.date.format("%Y-%m-%d").to_string();
        self.write(
            &layout.intent_file(),
            templates::INTENT,
            &json!({ "name": name, "date": date }),
        )?;
        self.write(
            &layout.idea_file(),
            templates::IDEA,
            &json!({ "title": "Example Idea" }),
        )?;
        self.write(
            &layout.task_file(),
            templates::TASK,
            &json!({ "title": "Example Task" }),
        )?;
        self.write(
            &layout.subtask_file(),
            templates::SUBTASK,
            &json!({ "title": "Example Subtask" }),
        )?;

        info!("Initialized project '{}' at {:?}", name, layout.root);
        Ok(layout.root)
    }

    /// Text tree of the generated structure
    pub fn structure(&self, name: &str) -> Result<String> {
        Ok(self
            .registry
            .render(templates::STRUCTURE, &json!({ "name": name }))?)
    }

    fn write(&self, path: &Path, template: &str, data: &serde_json::Value) -> Result<()> {
        let content = self.registry.render(template, data)?;
        fs::write(path, content)?;
        debug!("Wrote {:?}", path);
        Ok(())
    }
}

/// Create project `name` under `base` using today's date
pub fn init_project(name: &str, base: &Path) -> Result<PathBuf> {
    Scaffolder::new()?.init_project(name, base)
}
