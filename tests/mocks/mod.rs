pub mod mock_email_sender;

pub use mock_email_sender::MockEmailSender;
