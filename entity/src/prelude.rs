pub use super::horse::Entity as Horse;
pub use super::otp::Entity as Otp;
pub use super::session::Entity as Session;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_message::Entity as TicketMessage;
pub use super::user::Entity as User;
