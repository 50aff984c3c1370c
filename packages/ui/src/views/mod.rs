mod login;
pub use login::LoginForm;

mod register;
pub use register::{validate_passwords, RegisterForm, MIN_PASSWORD_LEN};

mod topics;
pub use topics::{DeleteTopic, TopicForm, TopicList};

mod posts;
pub use posts::{DeletePost, PostCard, PostForm, PostList};
