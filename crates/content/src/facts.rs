//! The facts gallery content.
//!
//! Eight expandable fact cards. The icons are plain emoji so the
//! content stays framework free.

use bitkids_core::model::Localized;

/// One expandable card in the facts gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub icon: &'static str,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
}

pub const FACTS: &[Fact] = &[
    Fact {
        icon: "📅",
        title: Localized {
            de: "Bitcoin ist noch ein Kind!",
            en: "Bitcoin is still a child!",
            es: "¡Bitcoin todavía es un niño!",
        },
        description: Localized {
            de: "Bitcoin wurde 2009 erfunden - das ist jünger als manche eurer Geschwister! Ein Mensch mit dem Namen Satoshi Nakamoto hat Bitcoin erfunden, aber niemand weiß, wer diese Person wirklich ist. Es ist wie ein Superheld mit geheimer Identität!",
            en: "Bitcoin was invented in 2009 - that's younger than some of your siblings! A person named Satoshi Nakamoto invented Bitcoin, but nobody knows who this person really is. It's like a superhero with a secret identity!",
            es: "Bitcoin fue inventado en 2009 - ¡eso es más joven que algunos de tus hermanos! Una persona llamada Satoshi Nakamoto inventó Bitcoin, pero nadie sabe quién es realmente esta persona. ¡Es como un superhéroe con identidad secreta!",
        },
    },
    Fact {
        icon: "⚡",
        title: Localized {
            de: "Schneller als ein Blitz!",
            en: "Faster than the Police!",
            es: "¡Más rápido que un rayo!",
        },
        description: Localized {
            de: "Mit dem Lightning Network kann man Bitcoin so schnell wie ein Blitz verschicken! Man kann damit sogar Süßigkeiten kaufen oder für Spiele bezahlen, und das Geld ist sofort da - schneller als du 'Bitcoin' sagen kannst!",
            en: "With the Lightning Network, you can send Bitcoin as fast as lightning! You can even buy candy or pay for games with it, and the money is there instantly - faster than you can say 'Bitcoin'!",
            es: "¡Con la Red Lightning, puedes enviar Bitcoin tan rápido como un rayo! Incluso puedes comprar dulces o pagar juegos con él, y el dinero está allí al instante - ¡más rápido de lo que puedes decir 'Bitcoin'!",
        },
    },
    Fact {
        icon: "⭐",
        title: Localized {
            de: "Begrenzt wie Sammelkarten!",
            en: "Limited like trading cards!",
            es: "¡Limitado como tarjetas coleccionables!",
        },
        description: Localized {
            de: "Es gibt nur 21 Millionen Bitcoin - nicht mehr und nicht weniger! Das ist wie bei seltenen Sammelkarten: Je weniger es gibt, desto wertvoller sind sie. Manche Menschen besitzen nur einen kleinen Teil eines Bitcoins, so wie ein Puzzleteil.",
            en: "There are only 21 million Bitcoin - no more and no less! It's like rare trading cards: The fewer there are, the more valuable they are. Some people own only a small part of a Bitcoin, like a puzzle piece.",
            es: "¡Solo hay 21 millones de Bitcoin, ni más ni menos! Es como las tarjetas coleccionables raras: cuantas menos hay, más valiosas son. Algunas personas poseen solo una pequeña parte de un Bitcoin, como una pieza de rompecabezas.",
        },
    },
    Fact {
        icon: "🌍",
        title: Localized {
            de: "Auf der ganzen Welt zu Hause!",
            en: "At home all over the world!",
            es: "¡En casa en todo el mundo!",
        },
        description: Localized {
            de: "Bitcoin wird in fast jedem Land der Welt benutzt! Stell dir vor: Ein Kind in Japan kann mit demselben digitalen Geld bezahlen wie du hier. Bitcoin spricht alle Sprachen und reist um die ganze Welt, ohne einen Pass zu brauchen!",
            en: "Bitcoin is used in almost every country in the world! Imagine: A child in Japan can pay with the same digital money as you do here. Bitcoin speaks all languages and travels around the world without needing a passport!",
            es: "¡Bitcoin se usa en casi todos los países del mundo! Imagina: un niño en Japón puede pagar con el mismo dinero digital que tú aquí. ¡Bitcoin habla todos los idiomas y viaja por todo el mundo sin necesitar pasaporte!",
        },
    },
    Fact {
        icon: "🔒",
        title: Localized {
            de: "Sicherer als eine Schatztruhe!",
            en: "Safer than a treasure chest!",
            es: "¡Más seguro que un cofre del tesoro!",
        },
        description: Localized {
            de: "Bitcoin wird durch Mathematik und Codes geschützt, die so kompliziert sind, dass nicht einmal die schlauesten Erwachsenen sie knacken können! Es ist wie ein Tresor mit einem Passwort, das aus Millionen von Zahlen besteht.",
            en: "Bitcoin is protected by mathematics and codes that are so complicated that not even the smartest adults can crack them! It's like a safe with a password made up of millions of numbers.",
            es: "¡Bitcoin está protegido por matemáticas y códigos tan complicados que ni siquiera los adultos más inteligentes pueden descifrarlos! Es como una caja fuerte con una contraseña compuesta por millones de números.",
        },
    },
    Fact {
        icon: "💻",
        title: Localized {
            de: "Computer als Goldgräber!",
            en: "Computers as gold diggers!",
            es: "¡Computadoras como buscadores de oro!",
        },
        description: Localized {
            de: "Neue Bitcoin werden von Computern 'geschürft', wie Goldgräber nach Gold suchen. Diese Computer lösen Rätsel, die gar nicht so schwer sind - aber es ist wie ein Glücksspiel, wer zuerst die richtige Lösung findet! Das Besondere: Egal wie viele Computer mitmachen, die Rätsel werden automatisch angepasst, damit immer ungefähr alle 10 Minuten neue Bitcoin gefunden werden. Wie ein Spiel, bei dem die Regeln sich ändern, damit es nicht zu leicht oder zu schwer wird!",
            en: "New Bitcoin are 'mined' by computers, like gold diggers looking for gold. These computers solve puzzles that aren't super hard - but it's like a lottery to see who finds the right answer first! The special thing: No matter how many computers join in, the puzzles are automatically adjusted so that new Bitcoin are found about every 10 minutes. It's like a game where the rules change to make sure it doesn't get too easy or too hard!",
            es: "Los nuevos Bitcoin son 'minados' por computadoras, como buscadores de oro buscando oro. Estas computadoras resuelven acertijos que no son super difíciles - ¡pero es como una lotería para ver quién encuentra la respuesta correcta primero! Lo especial: No importa cuántas computadoras se unan, los acertijos se ajustan automáticamente para que se encuentren nuevos Bitcoin aproximadamente cada 10 minutos. ¡Es como un juego donde las reglas cambian para asegurarse de que no se vuelva demasiado fácil o difícil!",
        },
    },
    Fact {
        icon: "🚀",
        title: Localized {
            de: "Bitcoin war im Weltraum!",
            en: "Bitcoin was in space!",
            es: "¡Bitcoin estuvo en el espacio!",
        },
        description: Localized {
            de: "Wusstest du, dass Bitcoin schon im Weltraum war? Ein Satellit sendet die Bitcoin-Blockchain rund um die Erde. Das bedeutet, dass Bitcoin sogar funktionieren würde, wenn das Internet auf der Erde ausfällt. Wie cool ist das denn?",
            en: "Did you know that Bitcoin has already been in space? A satellite transmits the Bitcoin blockchain around the Earth. This means that Bitcoin would even work if the internet on Earth went down. How cool is that?",
            es: "¿Sabías que Bitcoin ya ha estado en el espacio? Un satélite transmite la blockchain de Bitcoin alrededor de la Tierra. Esto significa que Bitcoin funcionaría incluso si internet en la Tierra fallara. ¿Qué tan genial es eso?",
        },
    },
    Fact {
        icon: "💡",
        title: Localized {
            de: "Dein eigenes Geld!",
            en: "Your own money!",
            es: "¡Tu propio dinero!",
        },
        description: Localized {
            de: "Mit Bitcoin kannst du dein eigenes Geld kontrollieren, ohne dass Erwachsene dir sagen müssen, was du damit machen darfst! Es ist wie dein eigenes digitales Sparschwein, zu dem nur du den Schlüssel hast. Du kannst es überall hin mitnehmen, sogar in deiner Hosentasche auf einem kleinen Gerät!",
            en: "With Bitcoin, you can control your own money without adults having to tell you what you can do with it! It's like your own digital piggy bank that only you have the key to. You can take it anywhere, even in your pocket on a small device!",
            es: "¡Con Bitcoin, puedes controlar tu propio dinero sin que los adultos tengan que decirte qué puedes hacer con él! Es como tu propia alcancía digital a la que solo tú tienes la llave. Puedes llevarlo a cualquier parte, ¡incluso en tu bolsillo en un dispositivo pequeño!",
        },
    },
];
