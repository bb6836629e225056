use std::path::PathBuf;

use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc::{self, Receiver};
use tokio_util::sync::CancellationToken;
use uidit_buffer::message::{BufferMessage, TextModification};
use uidit_keymap::{
    conversion,
    message::{KeySequence, KeymapMessage},
    MessageResolver,
};

use crate::{
    error::AppError,
    task::{Task, TaskManager},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub sequence: KeySequence,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Clone, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    FileDownloaded(PathBuf),
    FileDownloadFailed(PathBuf, String),
    FileLoaded(PathBuf, String),
    FileLoadFailed(PathBuf, String),
    Resize(u16, u16),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Keymap(msg) => write!(f, "Keymap({:?})", msg),
            Message::FileDownloaded(path) => write!(f, "FileDownloaded({:?})", path),
            Message::FileDownloadFailed(path, err) => {
                write!(f, "FileDownloadFailed({:?}, {:?})", path, err)
            }
            Message::FileLoaded(path, _) => write!(f, "FileLoaded({:?}, _)", path),
            Message::FileLoadFailed(path, err) => {
                write!(f, "FileLoadFailed({:?}, {:?})", path, err)
            }
            Message::Resize(x, y) => write!(f, "Resize({}, {})", x, y),
        }
    }
}

pub struct Emitter {
    cancellation: CancellationToken,
    pub receiver: Receiver<Envelope>,
    tasks: TaskManager,
}

impl Emitter {
    pub fn start() -> Self {
        let (sender, receiver) = mpsc::channel(16);
        let tasks = TaskManager::new(sender.clone());

        let cancellation = CancellationToken::new();
        start_crossterm_listener(cancellation.child_token(), sender);

        Self {
            cancellation,
            receiver,
            tasks,
        }
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.cancellation.cancel();
        self.receiver.close();
        self.tasks.finishing().await
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }
}

fn start_crossterm_listener(
    cancellation: CancellationToken,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut resolver = MessageResolver::default();
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            tokio::select! {
                _ = cancellation.cancelled() => break,
                event = crossterm_event => match event {
                    Some(Ok(event)) => {
                        if let Some(envelope) = handle_crossterm_event(&mut resolver, event) {
                            if sender.send(envelope).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Err(error)) => {
                        tracing::error!("reading terminal event failed: {:?}", error);
                    }
                    None => break,
                },
            }
        }
    });
}

fn handle_crossterm_event(
    resolver: &mut MessageResolver,
    event: crossterm::event::Event,
) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            if let Some(key) = conversion::to_key(&key) {
                let (messages, sequence) = resolver.add_key(key);
                return Some(Envelope {
                    messages: messages.into_iter().map(Message::Keymap).collect(),
                    sequence,
                    source: MessageSource::User,
                });
            }

            None
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            sequence: KeySequence::None,
            source: MessageSource::User,
        }),
        crossterm::event::Event::Paste(content) => {
            let content = content.replace("\r\n", "\n").replace('\r', "\n");
            let modification = TextModification::Insert(content);
            Some(Envelope {
                messages: vec![Message::Keymap(KeymapMessage::Buffer(
                    BufferMessage::Modification(1, modification),
                ))],
                sequence: KeySequence::None,
                source: MessageSource::User,
            })
        }
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Mouse(_) => None,
    }
}
