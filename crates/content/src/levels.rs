//! The savings adventure level table.
//!
//! Thirteen milestones from a freshly hatched piggy to the satoshi
//! millionaire, strictly ascending and starting at 0 sats.

use bitkids_core::model::{LevelEntry, Localized};

pub const LEVELS: &[LevelEntry] = &[
    LevelEntry {
        threshold: 0,
        icon: "🐣",
        name: Localized {
            de: "Sparschwein geschlüpft!",
            en: "Piggy Hatched!",
            es: "¡Alcancía Nacida!",
        },
        message: Localized {
            de: "Dein Sparschwein ist geboren! Es ist klein, rosa und bereit zum Sparen!",
            en: "Your piggy is born! It's small, pink, and ready to save!",
            es: "¡Tu alcancía ha nacido! Es pequeña, rosada y lista para ahorrar!",
        },
    },
    LevelEntry {
        threshold: 100,
        icon: "🪙",
        name: Localized {
            de: "Erster Klang!",
            en: "Tiny Tink!",
            es: "¡Primer Tintineo!",
        },
        message: Localized {
            de: "Du hast deine ersten Satoshis gespart - juhu! Hörst du sie klingen? Kling kling!",
            en: "You saved your first satoshis — yay! Can you hear them drop? Tink tink!",
            es: "¡Ahorraste tus primeros satoshis — hurra! ¿Puedes oírlos caer? ¡Tin tin!",
        },
    },
    LevelEntry {
        threshold: 500,
        icon: "🐷",
        name: Localized {
            de: "Kleiner Sparer",
            en: "Little Saver",
            es: "Pequeño Ahorrador",
        },
        message: Localized {
            de: "Der Bauch deines Sparschweins beginnt zu klimpern! Weiter so!",
            en: "Your piggy's tummy is starting to jingle! Keep going!",
            es: "¡La pancita de tu alcancía está empezando a sonar! ¡Sigue así!",
        },
    },
    LevelEntry {
        threshold: 1_000,
        icon: "🎯",
        name: Localized {
            de: "Ferkel-Power!",
            en: "Piglet Power!",
            es: "¡Poder de Cerdito!",
        },
        message: Localized {
            de: "Du hast dein erstes großes Ziel erreicht - Highfive! ✋",
            en: "You reached your first big goal — high five! ✋",
            es: "¡Alcanzaste tu primera gran meta — choca esos cinco! ✋",
        },
    },
    LevelEntry {
        threshold: 5_000,
        icon: "⚡",
        name: Localized {
            de: "Blitzschnelle Schnauze",
            en: "Zappy Snout",
            es: "Hocico Eléctrico",
        },
        message: Localized {
            de: "Wow! Dein Sparschwein ist voller Energie! ⚡ Mehr Sats, mehr Spaß!",
            en: "Whoa! Your piggy is zapping with energy! ⚡ More sats, more fun!",
            es: "¡Guau! ¡Tu alcancía está llena de energía! ⚡ ¡Más sats, más diversión!",
        },
    },
    LevelEntry {
        threshold: 10_000,
        icon: "🚀",
        name: Localized {
            de: "Raketen-Schweinchen",
            en: "Rocket Piggy",
            es: "Alcancía Cohete",
        },
        message: Localized {
            de: "Dein Sparschwein hebt ab! Du sparst wie ein Stern! 🌟",
            en: "Piggy launches into the sky! You're saving like a star! 🌟",
            es: "¡La alcancía despega hacia el cielo! ¡Estás ahorrando como una estrella! 🌟",
        },
    },
    LevelEntry {
        threshold: 25_000,
        icon: "💼",
        name: Localized {
            de: "Schatzsucher",
            en: "Treasure Tracker",
            es: "Rastreador de Tesoros",
        },
        message: Localized {
            de: "Du hast einen geheimen Satoshi-Schatz gefunden! Suche weiter! 🔍",
            en: "You've found a secret satoshi stash! Keep tracking more! 🔍",
            es: "¡Has encontrado un alijo secreto de satoshis! ¡Sigue rastreando más! 🔍",
        },
    },
    LevelEntry {
        threshold: 50_000,
        icon: "💡",
        name: Localized {
            de: "Halbzeit-Held",
            en: "Half-Way Hero",
            es: "Héroe a Mitad de Camino",
        },
        message: Localized {
            de: "Du bist auf halbem Weg zum SATS-MEISTER! 🦸 Dein Sparschwein ist stolz!",
            en: "You're halfway to being a SATS MASTER! 🦸 Piggy is proud!",
            es: "¡Estás a mitad de camino de ser un MAESTRO DE SATS! 🦸 ¡Tu alcancía está orgullosa!",
        },
    },
    LevelEntry {
        threshold: 100_000,
        icon: "🎩",
        name: Localized {
            de: "Sparschwein mit Hut",
            en: "Hodl Hat Piggy",
            es: "Alcancía con Sombrero",
        },
        message: Localized {
            de: "Dein Sparschwein bekommt einen schicken Hut, weil es so verantwortungsvoll ist! 🎩",
            en: "Piggy gets a fancy hat for being so responsible! 🎩",
            es: "¡Tu alcancía recibe un sombrero elegante por ser tan responsable! 🎩",
        },
    },
    LevelEntry {
        threshold: 250_000,
        icon: "🧠",
        name: Localized {
            de: "Satoshi-Zauberer",
            en: "Satoshi Wizard",
            es: "Mago Satoshi",
        },
        message: Localized {
            de: "Du bist jetzt ein Spar-Zauberer! Überall Funken! ✨",
            en: "You're a savings wizard now! Sparkles everywhere! ✨",
            es: "¡Ahora eres un mago del ahorro! ¡Chispas por todas partes! ✨",
        },
    },
    LevelEntry {
        threshold: 500_000,
        icon: "🏆",
        name: Localized {
            de: "Goldenes Schweinchen",
            en: "Golden Piggy",
            es: "Alcancía Dorada",
        },
        message: Localized {
            de: "Dein Sparschwein glänzt golden! Du bist so nah am ultimativen Ziel! 💛",
            en: "Piggy is glowing gold! You're so close to the ultimate goal! 💛",
            es: "¡Tu alcancía brilla como el oro! ¡Estás muy cerca de la meta final! 💛",
        },
    },
    LevelEntry {
        threshold: 750_000,
        icon: "💎",
        name: Localized {
            de: "Diamant-Schnauze",
            en: "Diamond Snout",
            es: "Hocico de Diamante",
        },
        message: Localized {
            de: "Dein Sparschwein glänzt wie ein Diamant! Kannst du die Million riechen? 🐽💎",
            en: "Piggy shines like a diamond! Can you smell the million? 🐽💎",
            es: "¡Tu alcancía brilla como un diamante! ¿Puedes oler el millón? 🐽💎",
        },
    },
    LevelEntry {
        threshold: 1_000_000,
        icon: "👑",
        name: Localized {
            de: "Sparschwein-Millionär!",
            en: "Piggy Millionaire!",
            es: "¡Alcancía Millonaria!",
        },
        message: Localized {
            de: "Du hast es geschafft! 🎉 Dein Sparschwein tanzt, Feuerwerk steigt auf - du bist ein Satoshi-Superstar! 🌈🎆",
            en: "You did it! 🎉 Your piggy dances, fireworks go off — you're a satoshi superstar! 🌈🎆",
            es: "¡Lo lograste! 🎉 Tu alcancía baila, hay fuegos artificiales — ¡eres una superestrella de satoshi! 🌈🎆",
        },
    },
];
