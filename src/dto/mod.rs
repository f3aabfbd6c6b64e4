pub mod feedback_dto;
