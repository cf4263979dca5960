pub mod trivia;
