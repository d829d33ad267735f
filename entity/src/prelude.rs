pub use super::chat::Entity as Chat;
pub use super::game::Entity as Game;
pub use super::game_task::Entity as GameTask;
pub use super::game_team::Entity as GameTeam;
pub use super::message::Entity as Message;
pub use super::task::Entity as Task;
pub use super::team::Entity as Team;
pub use super::team_user::Entity as TeamUser;
pub use super::user::Entity as User;
