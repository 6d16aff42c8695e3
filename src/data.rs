//! Static page content: breeds, facts, characteristics and the quiz bank

/// One breed shown in the carousel and the breeds tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

/// Multiple-choice trivia item. `correct_answer` matches one option exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
}

pub const BREEDS: &[BreedEntry] = &[
    BreedEntry {
        name: "Siamese",
        description: "Known for their distinctive markings and vocal nature.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/25/Siam_lilacpoint.jpg/800px-Siam_lilacpoint.jpg",
    },
    BreedEntry {
        name: "Persian",
        description: "Recognized for their long fur and flat faces.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/15/White_Persian_Cat.jpg/800px-White_Persian_Cat.jpg",
    },
    BreedEntry {
        name: "Maine Coon",
        description: "One of the largest domesticated cat breeds with a distinctive physical appearance.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5f/Maine_Coon_cat_by_Tomitheos.JPG/800px-Maine_Coon_cat_by_Tomitheos.JPG",
    },
    BreedEntry {
        name: "British Shorthair",
        description: "Known for their chunky bodies, dense coat and broad faces.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9d/Britishblue.jpg/800px-Britishblue.jpg",
    },
    BreedEntry {
        name: "Scottish Fold",
        description: "Characterized by a gene mutation that affects cartilage throughout the body, giving the ears a 'folded' appearance.",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5d/Adult_Scottish_Fold.jpg/800px-Adult_Scottish_Fold.jpg",
    },
];

pub const FACTS: &[&str] = &[
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats have five toes on their front paws, but only four on the back ones.",
    "A cat's hearing is better than a dog's.",
    "Cats can rotate their ears 180 degrees.",
    "The oldest known pet cat existed 9,500 years ago.",
    "A cat's nose print is unique, much like a human's fingerprint.",
    "Cats walk like camels and giraffes: both right feet first, then both left feet.",
];

pub const CHARACTERISTICS: &[&str] = &[
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially their night vision",
    "Communicate through vocalizations, body language, and scent",
];

pub const INTRO_TEXT: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. They are known for their independence, agility, and affectionate nature.";

pub const OUTRO_TEXT: &str = "Whether you're a cat owner or just an admirer, these furry friends continue to captivate us with their charm and personality.";

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "How many hours a day does the average cat sleep?",
        options: ["8-10 hours", "12-16 hours", "18-20 hours", "4-6 hours"],
        correct_answer: "12-16 hours",
    },
    QuizQuestion {
        prompt: "What is a group of cats called?",
        options: ["A pack", "A pride", "A clowder", "A herd"],
        correct_answer: "A clowder",
    },
    QuizQuestion {
        prompt: "How many toes does a cat have on its front paws?",
        options: ["Four", "Five", "Six", "Three"],
        correct_answer: "Five",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_has_its_answer_among_options() {
        for q in QUIZ_QUESTIONS {
            let matches = q.options.iter().filter(|o| **o == q.correct_answer).count();
            assert_eq!(matches, 1, "question {:?}", q.prompt);
        }
    }

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(BREEDS.len(), 5);
        assert!(!FACTS.is_empty());
        assert_eq!(CHARACTERISTICS.len(), 4);
        assert_eq!(QUIZ_QUESTIONS.len(), 3);
    }

    #[test]
    fn test_breed_images_are_https() {
        for breed in BREEDS {
            assert!(breed.image_url.starts_with("https://"), "{}", breed.name);
        }
    }
}
