mod clean;
mod dirs;
