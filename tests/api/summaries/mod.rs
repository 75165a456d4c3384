mod day;
mod month;
mod year;
