//! Localized UI string tables.
//!
//! One struct per surface, one `const` table per language, resolved
//! through `get(Language)`. Messages with runtime values carry
//! `{placeholder}` markers filled by [`fill`].

use bitkids_core::model::Language;

/// Replace `{key}` placeholders in a message template.
#[must_use]
pub fn fill(template: &str, replacements: &[(&str, String)]) -> String {
    let mut result = template.to_string();
    for (key, value) in replacements {
        result = result.replace(&format!("{{{key}}}"), value);
    }
    result
}

//
// ─── HOME ──────────────────────────────────────────────────────────────────────
//

pub struct HomeStrings {
    pub title: &'static str,
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub what_is_bitcoin_title: &'static str,
    pub what_is_bitcoin_content: &'static str,
    pub digital_piggy_bank_title: &'static str,
    pub digital_piggy_bank_content: &'static str,
    pub knowledge_tab: &'static str,
    pub quiz_tab: &'static str,
    pub facts_tab: &'static str,
    pub bitcoin_basics_title: &'static str,
    pub what_is_bitcoin_section_title: &'static str,
    pub what_is_bitcoin_section_content: &'static str,
    pub how_bitcoin_works_title: &'static str,
    pub how_bitcoin_works_content: &'static str,
    pub why_bitcoin_special_title: &'static str,
    pub why_bitcoin_special_content: &'static str,
    pub how_to_get_bitcoin_title: &'static str,
    pub how_to_get_bitcoin_content: &'static str,
    pub footer_text: &'static str,
}

impl HomeStrings {
    #[must_use]
    pub fn get(language: Language) -> &'static Self {
        match language {
            Language::De => &HOME_DE,
            Language::En => &HOME_EN,
            Language::Es => &HOME_ES,
        }
    }
}

const HOME_DE: HomeStrings = HomeStrings {
    title: "Bitcoin für Kinder",
    welcome_title: "Willkommen in der Bitcoin-Welt!",
    welcome_subtitle: "Entdecke was Bitcoin ist und wie digitales Geld funktioniert!",
    what_is_bitcoin_title: "Was ist Bitcoin?",
    what_is_bitcoin_content: "Bitcoin ist wie magisches Geld im Computer! Es ist nicht aus Papier oder Metall, sondern besteht aus Zahlen und Codes.",
    digital_piggy_bank_title: "Digitales Sparschwein",
    digital_piggy_bank_content: "Stell dir vor, du hast ein Sparschwein, das im Computer lebt! So ähnlich funktioniert auch Bitcoin - es ist ein digitaler Schatz.",
    knowledge_tab: "Wissen",
    quiz_tab: "Quiz",
    facts_tab: "Fakten",
    bitcoin_basics_title: "Bitcoin-Grundlagen",
    what_is_bitcoin_section_title: "Was ist Bitcoin?",
    what_is_bitcoin_section_content: "Bitcoin ist digitales Geld, das nur im Computer existiert. Anders als Euro-Münzen kannst du Bitcoin nicht anfassen, aber du kannst damit trotzdem Dinge kaufen!",
    how_bitcoin_works_title: "Wie funktioniert Bitcoin?",
    how_bitcoin_works_content: "Bitcoin funktioniert mit einer Technologie namens \"Blockchain\". Das ist wie ein großes Buch, in dem alle Bitcoin-Überweisungen aufgeschrieben werden. Viele Computer auf der ganzen Welt passen auf, dass niemand in diesem Buch schummelt.",
    why_bitcoin_special_title: "Warum ist Bitcoin besonders?",
    why_bitcoin_special_content: "Bitcoin gehört keiner Bank oder Regierung. Es gehört allen Menschen, die es benutzen. Du kannst Bitcoin an jeden Menschen auf der Welt schicken, egal wo er wohnt!",
    how_to_get_bitcoin_title: "Wie bekommt man Bitcoin?",
    how_to_get_bitcoin_content: "Du kannst Bitcoin kaufen, als Geschenk bekommen oder für Arbeit bezahlt werden. Manche Menschen lassen auch spezielle Computer arbeiten, um neue Bitcoins zu \"schürfen\" - das nennt man \"Mining\".",
    footer_text: "Bitcoin-Lernbereich für Kinder zwischen 7 und 12 Jahren",
};

const HOME_EN: HomeStrings = HomeStrings {
    title: "Bitcoin for Kids",
    welcome_title: "Welcome to the Bitcoin World!",
    welcome_subtitle: "Discover what Bitcoin is and how digital money works!",
    what_is_bitcoin_title: "What is Bitcoin?",
    what_is_bitcoin_content: "Bitcoin is like magic money in the computer! It's not made of paper or metal, but consists of numbers and codes.",
    digital_piggy_bank_title: "Digital Piggy Bank",
    digital_piggy_bank_content: "Imagine having a piggy bank that lives in the computer! That's similar to how Bitcoin works - it's a digital treasure.",
    knowledge_tab: "Knowledge",
    quiz_tab: "Quiz",
    facts_tab: "Facts",
    bitcoin_basics_title: "Bitcoin Basics",
    what_is_bitcoin_section_title: "What is Bitcoin?",
    what_is_bitcoin_section_content: "Bitcoin is digital money that only exists in computers. Unlike Euro coins, you can't touch Bitcoin, but you can still use it to buy things!",
    how_bitcoin_works_title: "How does Bitcoin work?",
    how_bitcoin_works_content: "Bitcoin works with a technology called \"blockchain\". It's like a big book where all Bitcoin transactions are recorded. Many computers around the world make sure that nobody can cheat in this book.",
    why_bitcoin_special_title: "Why is Bitcoin special?",
    why_bitcoin_special_content: "Bitcoin doesn't belong to any bank or government. It belongs to all the people who use it. You can send Bitcoin to anyone in the world, no matter where they live!",
    how_to_get_bitcoin_title: "How do you get Bitcoin?",
    how_to_get_bitcoin_content: "You can buy Bitcoin, receive it as a gift, or get paid for work. Some people also have special computers work to \"mine\" new Bitcoins - that's called \"mining\".",
    footer_text: "Bitcoin learning area for children between 7 and 12 years",
};

const HOME_ES: HomeStrings = HomeStrings {
    title: "Bitcoin para Niños",
    welcome_title: "¡Bienvenido al Mundo Bitcoin!",
    welcome_subtitle: "¡Descubre qué es Bitcoin y cómo funciona el dinero digital!",
    what_is_bitcoin_title: "¿Qué es Bitcoin?",
    what_is_bitcoin_content: "¡Bitcoin es como dinero mágico en la computadora! No está hecho de papel o metal, sino que consiste en números y códigos.",
    digital_piggy_bank_title: "Alcancía Digital",
    digital_piggy_bank_content: "¡Imagina tener una alcancía que vive en la computadora! Así es como funciona Bitcoin - es un tesoro digital.",
    knowledge_tab: "Conocimiento",
    quiz_tab: "Cuestionario",
    facts_tab: "Datos",
    bitcoin_basics_title: "Fundamentos de Bitcoin",
    what_is_bitcoin_section_title: "¿Qué es Bitcoin?",
    what_is_bitcoin_section_content: "Bitcoin es dinero digital que solo existe en computadoras. A diferencia de las monedas de Euro, no puedes tocar Bitcoin, ¡pero aún puedes usarlo para comprar cosas!",
    how_bitcoin_works_title: "¿Cómo funciona Bitcoin?",
    how_bitcoin_works_content: "Bitcoin funciona con una tecnología llamada \"blockchain\". Es como un gran libro donde se registran todas las transacciones de Bitcoin. Muchas computadoras en todo el mundo se aseguran de que nadie pueda hacer trampa en este libro.",
    why_bitcoin_special_title: "¿Por qué es especial Bitcoin?",
    why_bitcoin_special_content: "Bitcoin no pertenece a ningún banco o gobierno. Pertenece a todas las personas que lo usan. ¡Puedes enviar Bitcoin a cualquier persona en el mundo, sin importar dónde viva!",
    how_to_get_bitcoin_title: "¿Cómo se obtiene Bitcoin?",
    how_to_get_bitcoin_content: "Puedes comprar Bitcoin, recibirlo como regalo o recibir pago por trabajo. Algunas personas también tienen computadoras especiales que trabajan para \"minar\" nuevos Bitcoins - eso se llama \"minería\".",
    footer_text: "Área de aprendizaje de Bitcoin para niños entre 7 y 12 años",
};

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

pub struct QuizStrings {
    pub quiz_title: &'static str,
    pub quiz_subtitle: &'static str,
    pub difficulty_title: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub question_count_title: &'static str,
    pub start_quiz: &'static str,
    pub question: &'static str,
    pub of: &'static str,
    pub points: &'static str,
    pub check_answer: &'static str,
    pub next_question: &'static str,
    pub keep_learning: &'static str,
    pub show_result: &'static str,
    pub quiz_completed: &'static str,
    /// Uses `{score}` and `{total}` placeholders.
    pub correct_answers: &'static str,
    pub new_quiz: &'static str,
    pub correct_header: &'static str,
    pub incorrect_header: &'static str,
    pub feedback_perfect: &'static str,
    pub feedback_great: &'static str,
    pub feedback_good: &'static str,
    pub feedback_okay: &'static str,
    pub feedback_keep_going: &'static str,
    pub no_questions: &'static str,
}

impl QuizStrings {
    #[must_use]
    pub fn get(language: Language) -> &'static Self {
        match language {
            Language::De => &QUIZ_DE,
            Language::En => &QUIZ_EN,
            Language::Es => &QUIZ_ES,
        }
    }

    /// The feedback line for a finished session.
    #[must_use]
    pub fn feedback(&self, tier: bitkids_core::model::FeedbackTier) -> &'static str {
        use bitkids_core::model::FeedbackTier;
        match tier {
            FeedbackTier::Perfect => self.feedback_perfect,
            FeedbackTier::Great => self.feedback_great,
            FeedbackTier::Good => self.feedback_good,
            FeedbackTier::Okay => self.feedback_okay,
            FeedbackTier::KeepGoing => self.feedback_keep_going,
        }
    }
}

const QUIZ_DE: QuizStrings = QuizStrings {
    quiz_title: "Bitcoin-Quiz",
    quiz_subtitle: "Teste dein Wissen über Bitcoin und werde zum Bitcoin-Experten!",
    difficulty_title: "Schwierigkeitsgrad",
    easy: "Leicht",
    medium: "Mittel",
    hard: "Schwer",
    question_count_title: "Anzahl der Fragen",
    start_quiz: "Quiz starten",
    question: "Frage",
    of: "von",
    points: "Punkte",
    check_answer: "Antwort prüfen",
    next_question: "Nächste Frage",
    keep_learning: "Weiter lernen!",
    show_result: "Ergebnis anzeigen",
    quiz_completed: "Quiz beendet!",
    correct_answers: "Du hast {score} von {total} Fragen richtig beantwortet!",
    new_quiz: "Neues Quiz",
    correct_header: "Super gemacht!",
    incorrect_header: "Nicht schlimm! Hier ist die Erklärung:",
    feedback_perfect: "Fantastisch! Du bist ein echter Bitcoin-Experte!",
    feedback_great: "Super gemacht! Du weißt schon sehr viel über Bitcoin!",
    feedback_good: "Gut gemacht! Du lernst schnell über Bitcoin!",
    feedback_okay: "Nicht schlecht! Beim nächsten Mal schaffst du bestimmt noch mehr!",
    feedback_keep_going: "Weiter so! Bitcoin ist manchmal knifflig, aber du lernst jeden Tag dazu!",
    no_questions: "Für diese Auswahl gibt es gerade keine Fragen.",
};

const QUIZ_EN: QuizStrings = QuizStrings {
    quiz_title: "Bitcoin Quiz",
    quiz_subtitle: "Test your knowledge about Bitcoin and become a Bitcoin expert!",
    difficulty_title: "Difficulty Level",
    easy: "Easy",
    medium: "Medium",
    hard: "Hard",
    question_count_title: "Number of Questions",
    start_quiz: "Start Quiz",
    question: "Question",
    of: "of",
    points: "Points",
    check_answer: "Check Answer",
    next_question: "Next Question",
    keep_learning: "Keep learning!",
    show_result: "Show Result",
    quiz_completed: "Quiz Completed!",
    correct_answers: "You answered {score} out of {total} questions correctly!",
    new_quiz: "New Quiz",
    correct_header: "Great job!",
    incorrect_header: "No problem! Here's the explanation:",
    feedback_perfect: "Fantastic! You're a real Bitcoin expert!",
    feedback_great: "Great job! You already know a lot about Bitcoin!",
    feedback_good: "Well done! You're learning quickly about Bitcoin!",
    feedback_okay: "Not bad! Next time you'll surely get even more!",
    feedback_keep_going: "Keep going! Bitcoin can be tricky, but you learn more every day!",
    no_questions: "There are no questions for this selection right now.",
};

const QUIZ_ES: QuizStrings = QuizStrings {
    quiz_title: "Cuestionario de Bitcoin",
    quiz_subtitle: "¡Pon a prueba tus conocimientos sobre Bitcoin y conviértete en un experto en Bitcoin!",
    difficulty_title: "Nivel de Dificultad",
    easy: "Fácil",
    medium: "Medio",
    hard: "Difícil",
    question_count_title: "Número de Preguntas",
    start_quiz: "Iniciar Cuestionario",
    question: "Pregunta",
    of: "de",
    points: "Puntos",
    check_answer: "Comprobar Respuesta",
    next_question: "Siguiente Pregunta",
    keep_learning: "¡Sigue aprendiendo!",
    show_result: "Mostrar Resultado",
    quiz_completed: "¡Cuestionario Completado!",
    correct_answers: "¡Has respondido correctamente a {score} de {total} preguntas!",
    new_quiz: "Nuevo Cuestionario",
    correct_header: "¡Buen trabajo!",
    incorrect_header: "¡No hay problema! Aquí está la explicación:",
    feedback_perfect: "¡Fantástico! ¡Eres un verdadero experto en Bitcoin!",
    feedback_great: "¡Buen trabajo! ¡Ya sabes mucho sobre Bitcoin!",
    feedback_good: "¡Bien hecho! ¡Estás aprendiendo rápidamente sobre Bitcoin!",
    feedback_okay: "¡No está mal! ¡La próxima vez seguramente conseguirás aún más!",
    feedback_keep_going: "¡Sigue así! Bitcoin puede ser complicado, ¡pero aprendes más cada día!",
    no_questions: "No hay preguntas para esta selección en este momento.",
};

//
// ─── FACTS ─────────────────────────────────────────────────────────────────────
//

pub struct FactsStrings {
    pub title: &'static str,
    pub did_you_know: &'static str,
    pub did_you_know_text: &'static str,
}

impl FactsStrings {
    #[must_use]
    pub fn get(language: Language) -> &'static Self {
        match language {
            Language::De => &FACTS_DE,
            Language::En => &FACTS_EN,
            Language::Es => &FACTS_ES,
        }
    }
}

const FACTS_DE: FactsStrings = FactsStrings {
    title: "Spannende Bitcoin-Fakten",
    did_you_know: "Wusstest du schon?",
    did_you_know_text: "Mit diesem Wissen über Bitcoin kannst du die digitale Zukunft besser verstehen. Toll, was du schon alles gelernt hast!",
};

const FACTS_EN: FactsStrings = FactsStrings {
    title: "Exciting Bitcoin Facts",
    did_you_know: "Did you know?",
    did_you_know_text: "With this knowledge about Bitcoin, you can better understand the digital future. Great what you've already learned!",
};

const FACTS_ES: FactsStrings = FactsStrings {
    title: "Datos Interesantes sobre Bitcoin",
    did_you_know: "¿Sabías que?",
    did_you_know_text: "Con este conocimiento sobre Bitcoin, puedes entender mejor el futuro digital. ¡Genial lo que ya has aprendido!",
};

//
// ─── WALLET WIDGET ─────────────────────────────────────────────────────────────
//

pub struct WalletStrings {
    pub connect: &'static str,
    pub connecting: &'static str,
    pub connected: &'static str,
    pub sats: &'static str,
    pub disconnect: &'static str,
    pub your_balance: &'static str,
    pub my_piggy_bank: &'static str,
    pub next_level: &'static str,
    pub savings_adventure: &'static str,
}

impl WalletStrings {
    #[must_use]
    pub fn get(language: Language) -> &'static Self {
        match language {
            Language::De => &WALLET_DE,
            Language::En => &WALLET_EN,
            Language::Es => &WALLET_ES,
        }
    }
}

const WALLET_DE: WalletStrings = WalletStrings {
    connect: "Sparschwein verbinden",
    connecting: "Verbinde...",
    connected: "Verbunden!",
    sats: "Sats",
    disconnect: "Trennen",
    your_balance: "Dein Guthaben",
    my_piggy_bank: "Mein Sparschwein",
    next_level: "Nächstes Level",
    savings_adventure: "Spar-Abenteuer",
};

const WALLET_EN: WalletStrings = WalletStrings {
    connect: "Connect Piggy",
    connecting: "Connecting...",
    connected: "Connected!",
    sats: "sats",
    disconnect: "Disconnect",
    your_balance: "Your Balance",
    my_piggy_bank: "My Piggy Bank",
    next_level: "Next Level",
    savings_adventure: "Savings Adventure",
};

const WALLET_ES: WalletStrings = WalletStrings {
    connect: "Conectar Alcancía",
    connecting: "Conectando...",
    connected: "¡Conectado!",
    sats: "sats",
    disconnect: "Desconectar",
    your_balance: "Tu Saldo",
    my_piggy_bank: "Mi Alcancía",
    next_level: "Siguiente Nivel",
    savings_adventure: "Aventura de Ahorro",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_placeholders() {
        let quiz = QuizStrings::get(Language::En);
        let message = fill(
            quiz.correct_answers,
            &[("score", 3.to_string()), ("total", 5.to_string())],
        );
        assert_eq!(message, "You answered 3 out of 5 questions correctly!");
    }

    #[test]
    fn fill_ignores_unknown_placeholders() {
        assert_eq!(fill("{a} and {b}", &[("a", "x".into())]), "x and {b}");
    }

    #[test]
    fn every_language_has_a_table() {
        for language in Language::ALL {
            assert!(!HomeStrings::get(language).title.is_empty());
            assert!(!QuizStrings::get(language).quiz_title.is_empty());
            assert!(!FactsStrings::get(language).title.is_empty());
            assert!(!WalletStrings::get(language).connect.is_empty());
        }
    }
}
