//! Topic screens: list, create/edit form, delete confirmation.

use api::Topic;

use crate::{AppContext, Outcome, Redirect, Route, ScreenScope};

/// Topic list.
#[derive(Debug)]
pub struct TopicList {
    ctx: AppContext,
    scope: ScreenScope,
    topics: Vec<Topic>,
}

impl TopicList {
    pub fn mount(ctx: &AppContext) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            topics: Vec::new(),
        })
    }

    /// Fetch all topics. On failure the previous list is kept.
    pub async fn load(&mut self) -> Outcome<()> {
        let outcome = self
            .ctx
            .authorized(&self.scope, "load topics", |client, token| async move {
                client.topics().list(&token).await
            })
            .await;
        outcome.map(|topics| self.topics = topics)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn is_loading(&self) -> bool {
        self.scope.is_busy()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}

/// Create (`id == None`) or edit a topic.
#[derive(Debug)]
pub struct TopicForm {
    ctx: AppContext,
    scope: ScreenScope,
    id: Option<i64>,
    draft: Topic,
}

impl TopicForm {
    pub fn mount(ctx: &AppContext, id: Option<i64>) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            id,
            draft: Topic::default(),
        })
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// When editing, fetch the topic into the draft. Done(false) if it is gone.
    pub async fn load(&mut self) -> Outcome<bool> {
        let Some(id) = self.id else {
            return Outcome::Done(true);
        };
        let outcome = self
            .ctx
            .authorized(&self.scope, "load topic", |client, token| async move {
                client.topics().get_by_id(id, &token).await
            })
            .await;
        outcome.map(|found| match found {
            Some(topic) => {
                self.draft = topic;
                true
            }
            None => {
                self.ctx.notices.warning(format!("Topic {id} not found"));
                false
            }
        })
    }

    pub fn draft(&self) -> &Topic {
        &self.draft
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.scope.is_busy()
    }

    /// Create or update, then return to the topic list.
    pub async fn submit(&mut self) -> Outcome<Topic> {
        let mut payload = self.draft.clone();
        let editing = self.id.is_some();
        if let Some(id) = self.id {
            payload.id = id;
        }

        let action = if editing { "update topic" } else { "create topic" };
        let outcome = self
            .ctx
            .authorized(&self.scope, action, |client, token| async move {
                if editing {
                    client.topics().update(&payload, &token).await
                } else {
                    client.topics().create(&payload, &token).await
                }
            })
            .await;

        match &outcome {
            Outcome::Done(saved) => {
                self.draft = saved.clone();
                self.ctx.notices.success(if editing {
                    "Topic updated"
                } else {
                    "Topic created"
                });
                self.ctx.navigator.push(Route::Topics);
            }
            Outcome::Failed(_) => self.ctx.navigator.push(Route::Topics),
            _ => {}
        }
        outcome
    }

    pub fn cancel(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Topics);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}

/// Delete confirmation for one topic.
#[derive(Debug)]
pub struct DeleteTopic {
    ctx: AppContext,
    scope: ScreenScope,
    id: i64,
    topic: Option<Topic>,
}

impl DeleteTopic {
    pub fn mount(ctx: &AppContext, id: i64) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            id,
            topic: None,
        })
    }

    /// Fetch the topic so it can be shown before confirming.
    pub async fn load(&mut self) -> Outcome<()> {
        let id = self.id;
        let outcome = self
            .ctx
            .authorized(&self.scope, "load topic", |client, token| async move {
                client.topics().get_by_id(id, &token).await
            })
            .await;
        outcome.map(|topic| self.topic = topic)
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.scope.is_busy()
    }

    pub async fn confirm(&mut self) -> Outcome<()> {
        let id = self.id;
        let outcome = self
            .ctx
            .authorized(&self.scope, "delete topic", |client, token| async move {
                client.topics().delete(id, &token).await
            })
            .await;

        match &outcome {
            Outcome::Done(()) => {
                self.topic = None;
                self.ctx.notices.success("Topic deleted");
                self.ctx.navigator.push(Route::Topics);
            }
            Outcome::Failed(_) => self.ctx.navigator.push(Route::Topics),
            _ => {}
        }
        outcome
    }

    pub fn cancel(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Topics);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
