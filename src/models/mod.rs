pub mod daily_index;
