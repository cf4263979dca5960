#![allow(dead_code)]

use trivia::db::Db;
use trivia::models::{NewQuestion, SeedData};
use trivia::db::models::Category;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(url).await.expect("failed to create test database")
}

pub fn category(id: i64, kind: &str) -> Category {
    Category {
        id,
        kind: kind.to_string(),
    }
}

pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Six categories and nineteen questions. Ids are assigned 1..=19 in order.
///
/// - category 1 (Science): 3 questions
/// - category 6 (Sports): exactly 2 questions
/// - questions 4 and 9 contain "title"
/// - question 19 references category 42, which does not exist
pub fn sample_data() -> SeedData {
    let categories = vec![
        category(1, "Science"),
        category(2, "Art"),
        category(3, "Geography"),
        category(4, "History"),
        category(5, "Entertainment"),
        category(6, "Sports"),
    ];

    let questions = vec![
        new_question("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        new_question("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        new_question("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        new_question("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        new_question("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        new_question("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        new_question("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        new_question("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        new_question("What was the title of the 1990 fantasy directed by Tim Burton?", "Edward Scissorhands", 5, 3),
        new_question("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        new_question("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        new_question("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        new_question("Which Dutch graphic artist initials M C was a creator of optical illusions?", "Escher", 2, 1),
        new_question("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        new_question("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        new_question("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        new_question("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
        new_question("Who was the first woman to win a Nobel Prize?", "Marie Curie", 4, 3),
        new_question("Which planet is known as the red planet?", "Mars", 42, 1),
    ];

    SeedData {
        categories,
        questions,
    }
}

pub async fn seeded_test_db() -> Db {
    let db = create_test_db().await;
    db.seed(sample_data()).await.expect("failed to seed test database");
    db
}
