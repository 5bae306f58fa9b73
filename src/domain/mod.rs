pub mod common;
pub mod gym;
pub mod notification;
pub mod person;
pub mod secretary;
pub mod session;

pub use common::{Gender, GymId, Identifiable, NamedEntity, PartyId};
pub use gym::{EnrollmentPolicy, Gym, GymReport};
pub use notification::{Channel, Receiver, ReceiverDirectory};
pub use person::{Client, Instructor, Person};
pub use secretary::Secretary;
pub use session::{ForumType, Session, SessionId, SessionType};
