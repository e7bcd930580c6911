mod content;
mod graph;
mod login;
mod report;
mod summary;
mod top;
mod upload;
