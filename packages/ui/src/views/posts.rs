//! Post screens: list with cards, create/edit form, delete confirmation.

use api::{Post, Session, Topic};

use crate::{AppContext, Outcome, Redirect, Route, ScreenScope, ValidationError};

/// One post as shown in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub post: Post,
    /// Edit/delete links are offered to the author only.
    pub can_manage: bool,
}

impl PostCard {
    pub fn new(post: Post, session: &Session) -> Self {
        let can_manage = post.is_authored_by(session);
        Self { post, can_manage }
    }

    pub fn edit_route(&self) -> Option<Route> {
        self.can_manage.then_some(Route::EditPost { id: self.post.id })
    }

    pub fn delete_route(&self) -> Option<Route> {
        self.can_manage.then_some(Route::DeletePost { id: self.post.id })
    }

    /// Creation date for display, e.g. `01/05/2024 10:20:30`.
    pub fn date_label(&self) -> Option<String> {
        self.post
            .created_at
            .map(|at| at.format("%d/%m/%Y %H:%M:%S").to_string())
    }
}

/// Post list.
#[derive(Debug)]
pub struct PostList {
    ctx: AppContext,
    scope: ScreenScope,
    posts: Vec<Post>,
}

impl PostList {
    pub fn mount(ctx: &AppContext) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            posts: Vec::new(),
        })
    }

    /// Fetch all posts. On failure the previous list is kept.
    pub async fn load(&mut self) -> Outcome<()> {
        let outcome = self
            .ctx
            .authorized(&self.scope, "load posts", |client, token| async move {
                client.posts().list(&token).await
            })
            .await;
        outcome.map(|posts| self.posts = posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn cards(&self) -> Vec<PostCard> {
        let session = self.ctx.auth.session();
        self.posts
            .iter()
            .cloned()
            .map(|post| PostCard::new(post, &session))
            .collect()
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

/// Create (`id == None`) or edit a post.
///
/// The draft gets its topic from [`select_topic`](Self::select_topic) and its
/// author from the current session at submit time.
#[derive(Debug)]
pub struct PostForm {
    ctx: AppContext,
    scope: ScreenScope,
    id: Option<i64>,
    topics: Vec<Topic>,
    draft: Post,
}

impl PostForm {
    pub fn mount(ctx: &AppContext, id: Option<i64>) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            id,
            topics: Vec::new(),
            draft: Post::default(),
        })
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Fetch the selectable topics and, when editing, the post itself.
    pub async fn load(&mut self) -> Outcome<()> {
        let outcome = self
            .ctx
            .authorized(&self.scope, "load topics", |client, token| async move {
                client.topics().list(&token).await
            })
            .await;
        self.topics = match outcome {
            Outcome::Done(topics) => topics,
            other => return other.map(|_| ()),
        };

        let Some(id) = self.id else {
            return Outcome::Done(());
        };
        let outcome = self
            .ctx
            .authorized(&self.scope, "load post", |client, token| async move {
                client.posts().get_by_id(id, &token).await
            })
            .await;
        outcome.map(|found| match found {
            Some(post) => self.draft = post,
            None => self.ctx.notices.warning(format!("Post {id} not found")),
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn draft(&self) -> &Post {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
    }

    /// Fetch the chosen topic and attach it to the draft.
    pub async fn select_topic(&mut self, topic_id: i64) -> Outcome<()> {
        let outcome = self
            .ctx
            .authorized(&self.scope, "load topic", |client, token| async move {
                client.topics().get_by_id(topic_id, &token).await
            })
            .await;
        outcome.map(|found| match found {
            Some(topic) => self.draft.topic = Some(topic),
            None => self
                .ctx
                .notices
                .warning(format!("Topic {topic_id} not found")),
        })
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.draft.topic.as_ref().filter(|topic| topic.id != 0)
    }

    /// The submit control is enabled only with a topic attached and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.selected_topic().is_some() && !self.scope.is_busy()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.selected_topic().is_none() {
            return Err(ValidationError::TopicRequired);
        }
        if self.draft.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.draft.body.trim().is_empty() {
            return Err(ValidationError::EmptyField("text"));
        }
        Ok(())
    }

    /// Create or update with the selected topic and the session's author,
    /// then return to the post list.
    pub async fn submit(&mut self) -> Outcome<Post> {
        if let Err(e) = self.validate() {
            self.ctx.notices.warning(e.to_string());
            return Outcome::Rejected(e);
        }

        let mut payload = self.draft.clone();
        payload.author = Some(self.ctx.auth.session().author());
        let editing = self.id.is_some();
        if let Some(id) = self.id {
            payload.id = id;
        }

        let action = if editing { "update post" } else { "create post" };
        let outcome = self
            .ctx
            .authorized(&self.scope, action, |client, token| async move {
                if editing {
                    client.posts().update(&payload, &token).await
                } else {
                    client.posts().create(&payload, &token).await
                }
            })
            .await;

        match &outcome {
            Outcome::Done(saved) => {
                self.draft = saved.clone();
                self.ctx.notices.success(if editing {
                    "Post updated"
                } else {
                    "Post created"
                });
                self.ctx.navigator.push(Route::Posts);
            }
            Outcome::Failed(_) => self.ctx.navigator.push(Route::Posts),
            _ => {}
        }
        outcome
    }

    pub fn cancel(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Posts);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}

/// Delete confirmation for one post.
#[derive(Debug)]
pub struct DeletePost {
    ctx: AppContext,
    scope: ScreenScope,
    id: i64,
    post: Option<Post>,
}

impl DeletePost {
    pub fn mount(ctx: &AppContext, id: i64) -> Result<Self, Redirect> {
        ctx.require_session()?;
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            id,
            post: None,
        })
    }

    pub async fn load(&mut self) -> Outcome<()> {
        let id = self.id;
        let outcome = self
            .ctx
            .authorized(&self.scope, "load post", |client, token| async move {
                client.posts().get_by_id(id, &token).await
            })
            .await;
        outcome.map(|post| self.post = post)
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.scope.is_busy()
    }

    pub async fn confirm(&mut self) -> Outcome<()> {
        let id = self.id;
        let outcome = self
            .ctx
            .authorized(&self.scope, "delete post", |client, token| async move {
                client.posts().delete(id, &token).await
            })
            .await;

        match &outcome {
            Outcome::Done(()) => {
                self.post = None;
                self.ctx.notices.success("Post deleted");
                self.ctx.navigator.push(Route::Posts);
            }
            Outcome::Failed(_) => self.ctx.navigator.push(Route::Posts),
            _ => {}
        }
        outcome
    }

    pub fn cancel(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Posts);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
