mod construction;
mod description;
