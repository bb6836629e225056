use std::{
    fmt::{Debug, Display},
    path::PathBuf,
};

use tokio::{sync::mpsc::Sender, task::JoinSet};
use uidit_keymap::message::KeySequence;

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource},
};

mod file;

#[derive(Clone, Eq, PartialEq)]
pub enum Task {
    LoadFile(PathBuf),
    SaveFile(PathBuf, String),
}

impl Task {
    fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::LoadFile(path) => write!(f, "LoadFile({:?})", path),
            Task::SaveFile(path, _) => write!(f, "SaveFile({:?}, _)", path),
        }
    }
}

impl Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.describe(f)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.describe(f)
    }
}

pub struct TaskManager {
    sender: Sender<Envelope>,
    tasks: JoinSet<()>,
}

impl TaskManager {
    pub fn new(sender: Sender<Envelope>) -> Self {
        Self {
            sender,
            tasks: JoinSet::new(),
        }
    }

    pub fn run(&mut self, task: Task) {
        tracing::debug!("handling task: {}", task);

        while let Some(result) = self.tasks.try_join_next() {
            if let Err(error) = result {
                tracing::error!("task panicked or was aborted: {:?}", error);
            }
        }

        let sender = self.sender.clone();
        self.tasks.spawn(async move {
            let id = task.to_string();
            let message = run_task(task).await;

            tracing::debug!("task finished: {}", id);

            let envelope = Envelope {
                messages: vec![message],
                sequence: KeySequence::None,
                source: MessageSource::Task,
            };

            if let Err(error) = sender.send(envelope).await {
                tracing::warn!("sending result of task {} failed: {:?}", id, error);
            }
        });
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        while let Some(result) = self.tasks.join_next().await {
            if let Err(error) = result {
                errors.push(AppError::TaskJoinFailed(error));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }
}

async fn run_task(task: Task) -> Message {
    match task {
        Task::LoadFile(path) => match file::read_text(&path).await {
            Ok(content) => Message::FileLoaded(path, content),
            Err(error) => {
                tracing::error!("reading file {:?} failed: {:?}", path, error);
                Message::FileLoadFailed(path, error.to_string())
            }
        },
        Task::SaveFile(path, content) => match file::write_text(&path, &content).await {
            Ok(()) => Message::FileDownloaded(path),
            Err(error) => {
                tracing::error!("writing file {:?} failed: {:?}", path, error);
                Message::FileDownloadFailed(path, error.to_string())
            }
        },
    }
}
