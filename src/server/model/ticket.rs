//! Support ticket domain models.

use chrono::{DateTime, Utc};

use crate::model::ticket::{
    CreateTicketDto, TicketDetailDto, TicketDto, TicketMessageDto, TicketMessageViewDto,
};

/// Lifecycle state of a support ticket.
///
/// Customer messages reopen a ticket, admin replies mark it answered, and a
/// closed ticket accepts no further messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Answered,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Answered => "answered",
            Self::Closed => "closed",
        }
    }

    /// Parses a stored status, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "answered" => Some(Self::Answered),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub user_id: i32,
    pub subject: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            user_id: self.user_id,
            subject: self.subject,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The converted ticket
    /// - `Err(String)` - The stored status is not a known `TicketStatus`
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, String> {
        let status = TicketStatus::parse(&entity.status)
            .ok_or_else(|| format!("Unknown ticket status '{}'", entity.status))?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            subject: entity.subject,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketMessage {
    pub id: i32,
    pub ticket_id: i32,
    pub from_admin: bool,
    pub content: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TicketMessage {
    pub fn into_dto(self) -> TicketMessageViewDto {
        TicketMessageViewDto {
            id: self.id,
            from_admin: self.from_admin,
            content: self.content,
            image: self.image,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::ticket_message::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            from_admin: entity.from_admin,
            content: entity.content,
            image: entity.image,
            created_at: entity.created_at,
        }
    }
}

/// A ticket together with its messages, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub messages: Vec<TicketMessage>,
}

impl TicketDetail {
    pub fn into_dto(self) -> TicketDetailDto {
        TicketDetailDto {
            ticket: self.ticket.into_dto(),
            messages: self.messages.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Parameters for opening a ticket with its first message.
#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub user_id: i32,
    pub subject: String,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl CreateTicketParam {
    pub fn from_dto(user_id: i32, dto: CreateTicketDto) -> Self {
        Self {
            user_id,
            subject: dto.subject,
            content: non_empty(dto.content),
            image: non_empty(dto.image),
        }
    }
}

/// Parameters for posting a message on a ticket.
#[derive(Debug, Clone)]
pub struct AddTicketMessageParam {
    pub ticket_id: i32,
    pub from_admin: bool,
    pub content: Option<String>,
    pub image: Option<String>,
}

impl AddTicketMessageParam {
    /// Converts a message body that already passed the content presence pipe.
    ///
    /// # Arguments
    /// - `ticket_id` - Ticket receiving the message
    /// - `from_admin` - Whether the message is a support reply
    /// - `dto` - Message body
    pub fn from_dto(ticket_id: i32, from_admin: bool, dto: TicketMessageDto) -> Self {
        Self {
            ticket_id,
            from_admin,
            content: non_empty(dto.content),
            image: non_empty(dto.image),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
