// Scoring API: multipart upload (extract then score) and pre-structured records.

pub mod handlers;
