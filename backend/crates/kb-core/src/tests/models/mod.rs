mod board;
mod new_task;
mod priority;
