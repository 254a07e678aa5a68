pub mod commit_info_dto;
pub mod pull_request_dto;
pub mod remote_file;
