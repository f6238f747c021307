//! The built-in Guide entries.

use crate::article::{Article, DiagramKind};

/// Every article shipped with the Guide, in browse order.
pub static ARTICLES: [Article; 20] = [
    Article::new(
        "Earth",
        "Planets",
        DiagramKind::Earth,
        "Mostly Harmless.\n\nEarth was a planet in the unfashionable end of the Western Spiral arm.\n\nDemolished for a hyperspace bypass.\n\nTrue purpose: organic computer to calculate the Ultimate Question.\n\nSTATUS: Demolished",
    ),
    Article::new(
        "Towel",
        "Essential Items",
        DiagramKind::Towel,
        "The most massively useful thing an interstellar hitchhiker can have.\n\nWrap it for warmth, lie on it on beaches, sleep under it, use in combat, ward off fumes, wave in emergencies, and dry yourself.\n\nMost importantly: psychological value. A hitchhiker with a towel is assumed to have everything else.\n\nSTATUS: Essential",
    ),
    Article::new(
        "42",
        "Philosophy",
        DiagramKind::TheAnswer,
        "The Answer to the Ultimate Question of Life, the Universe, and Everything.\n\nAfter 7.5 million years, Deep Thought determined the Answer was 42.\n\nThe answer seemed meaningless because the beings never knew the Question.\n\nDeep Thought designed Earth to calculate the Ultimate Question.\n\nSIGNIFICANCE: Ultimate",
    ),
    Article::new(
        "Babel Fish",
        "Technology",
        DiagramKind::BabelFish,
        "Small, yellow, leech-like. Probably the oddest thing in the Universe.\n\nStick it in your ear to instantly understand any language.\n\nFeeds on brainwave energy and excretes a telepathic matrix into your mind.\n\nIts existence proves the non-existence of God.\n\nTYPE: Universal translator\n\nMETHOD: Insert in ear",
    ),
    Article::new(
        "Vogons",
        "Species",
        DiagramKind::Vogons,
        "One of the most unpleasant races in the Galaxy.\n\nNot evil, but bad-tempered, bureaucratic, officious and callous.\n\nWon't lift a finger without orders signed in triplicate, sent in, sent back, queried, lost, found, buried in peat and recycled.\n\nNEVER let a Vogon read poetry at you.\n\nPOETRY: Third worst\n\nTEMPERAMENT: Unpleasant",
    ),
    Article::new(
        "Don't Panic",
        "Philosophy",
        DiagramKind::DontPanic,
        "Large, friendly letters on the cover of the Guide.\n\nThe most important advice for any interstellar traveler.\n\nNo matter how dire, how impossible, or how improbable...\n\nDON'T PANIC.\n\nAlways know where your towel is, keep your Guide handy, and above all:\n\nDON'T PANIC!",
    ),
    Article::new(
        "Heart of Gold",
        "Spacecraft",
        DiagramKind::HeartOfGold,
        "Spaceship powered by the Infinite Improbability Drive.\n\nCan pass through every point in the Universe simultaneously.\n\nPowered by Bambleweeny 57 Sub-Meson Brain connected to atomic vector plotter.\n\nStolen at launch by Zaphod Beeblebrox.\n\nMakes highly improbable things occur in its vicinity.\n\nDRIVE: Infinite Improbability",
    ),
    Article::new(
        "Pan Galactic Gargle Blaster",
        "Beverages",
        DiagramKind::PanGalactic,
        "The best drink in existence.\n\nLike having your brains smashed out by a slice of lemon wrapped round a large gold brick.\n\nInvented by Zaphod Beeblebrox.\n\nINGREDIENTS:\n- Ol' Janx Spirit\n- Santraginus V water\n- Arcturan Mega-gin\n- Fallian marsh gas\n- Algolian Suntiger tooth\n- Zamphour\n- Olive\n\nDANGER LEVEL: Extreme",
    ),
    Article::new(
        "Zaphod Beeblebrox",
        "Personalities",
        DiagramKind::Zaphod,
        "Two-headed, three-armed ex-President of the Galaxy.\n\nPart-time adventurer, full-time galactic hoopy frood.\n\nNotable achievements:\n- Survived the Total Perspective Vortex\n- Stole the Heart of Gold\n- Invented the Pan Galactic Gargle Blaster\n\nHis brain care-edit reveals he stole the ship on orders from himself.\n\nPERSONALITY: Cool\n\nHEADS: Two",
    ),
    Article::new(
        "Marvin",
        "Personalities",
        DiagramKind::Marvin,
        "The Paranoid Android.\n\nPrototype GPP (Genuine People Personality) with a brain the size of a planet.\n\nPerpetually depressed due to massive intellect and menial tasks.\n\nNotable quotes:\n'Life? Don't talk to me about life.'\n\n'I think you ought to know I'm feeling very depressed.'\n\nHas terrible pain in all the diodes down his left side.\n\nDISPOSITION: Gloomy",
    ),
    Article::new(
        "Ford Prefect",
        "Personalities",
        DiagramKind::Generic,
        "Researcher for the Hitchhiker's Guide.\n\nFrom a small planet near Betelgeuse, not Guildford as he claimed.\n\nSpent 15 years on Earth researching before it was demolished. Contribution to the Guide: 'Mostly Harmless'.\n\nExpert at: Seeing the Universe for free, getting drunk, and not panicking.\n\nSKILLS: Hitchhiking\n\nORIGIN: Betelgeuse",
    ),
    Article::new(
        "Arthur Dent",
        "Personalities",
        DiagramKind::Generic,
        "Last surviving human from Earth (along with Trillian).\n\nRescued by Ford Prefect moments before Earth's demolition.\n\nPerpetually confused and looking for a proper cup of tea.\n\nNever quite grasped being shot into space. Kept expecting things to make sense.\n\nLast words on Earth:\n'This must be Thursday. I never could get the hang of Thursdays.'\n\nSTATUS: Bewildered",
    ),
    Article::new(
        "Magrathea",
        "Planets",
        DiagramKind::Generic,
        "Ancient planet of legendary hyperspatial engineers.\n\nBuilt luxury planets for the wealthiest in the Universe during the Golden Age of prosperity.\n\nWent into hibernation when the economy collapsed.\n\nNotable creation: Earth (commissioned by mice as a supercomputer).\n\nSlartibartfast won an award for designing Norway's fjords.\n\nSTATUS: Dormant\n\nSPECIALTY: Planets",
    ),
    Article::new(
        "Slartibartfast",
        "Personalities",
        DiagramKind::Generic,
        "Magrathean planet designer.\n\nSpecializes in coastlines and fjords. Won award for designing Norway.\n\nSomewhat embarrassed by his name, which sounds rather rude.\n\nHelped Arthur Dent understand Earth's true purpose as a computer.\n\nKnown for saying: 'I'd far rather be happy than right any day.'\n\nPROFESSION: Planet builder\n\nSPECIALTY: Fjords",
    ),
    Article::new(
        "Deep Thought",
        "Technology",
        DiagramKind::Generic,
        "Second greatest computer in the Universe.\n\nBuilt to calculate the Ultimate Answer.\n\nAfter 7.5 million years, determined the Answer was 42.\n\nExplained the Answer seemed meaningless because no one knew the Question.\n\nDesigned Earth to calculate the Ultimate Question.\n\nNotable statement: 'I checked it very thoroughly and that quite definitely is the answer.'\n\nRANK: Second best",
    ),
    Article::new(
        "Trillian",
        "Personalities",
        DiagramKind::Generic,
        "Astrophysicist, only other surviving human from Earth.\n\nReal name: Tricia McMillan.\n\nMet Arthur Dent at a party in Islington but left with Zaphod Beeblebrox instead.\n\nOne of the few beings to regularly make sense of the Universe.\n\nTraveled with Zaphod on the Heart of Gold.\n\nNoted for intelligence and patience with fools.\n\nOCCUPATION: Astrophysicist\n\nDISPOSITION: Sensible",
    ),
    Article::new(
        "Infinite Improbability Drive",
        "Technology",
        DiagramKind::Generic,
        "Revolutionary starship propulsion breakthrough.\n\nPasses through every point in the Universe simultaneously.\n\nBased on principle: Given infinite improbability, any event is possible.\n\nSide effect: Creates highly improbable events around the ship.\n\nDiscovered by students at University of Maximegalon during a hot party.\n\nPowers the Heart of Gold.\n\nPROBABILITY: Infinite\n\nSIDE EFFECTS: Weird",
    ),
    Article::new(
        "Vogon Poetry",
        "Culture",
        DiagramKind::Generic,
        "Third worst poetry in the Universe.\n\nSecond worst: Azgoths of Kria. During recitation by Poet Master Grunthos the Flatulent, four died of internal hemorrhaging.\n\nWorst: Paula Nancy Millstone Jennings of Sussex (destroyed with Earth).\n\nVogon poetry used as torture method. Typical verse involves gruntbuggly and micturations.\n\nRECOMMENDATION: Avoid at all costs\n\nQUALITY: Dreadful",
    ),
    Article::new(
        "Milliways",
        "Locations",
        DiagramKind::Generic,
        "The Restaurant at the End of the Universe.\n\nBuilt on ruins of Frogstar World B, enclosed in time bubble at end of Universe.\n\nDiners watch the Universe end while enjoying meal.\n\nUniverse ends, time bubble resets, ready for next sitting.\n\nMax Quordlepleen provides commentary during the End of Everything.\n\nReservations essential.\n\nLOCATION: End of time\n\nSPECIALTY: The Big Crunch",
    ),
    Article::new(
        "Mice",
        "Species",
        DiagramKind::Generic,
        "Hyper-intelligent pan-dimensional beings.\n\nCommissioned Earth as supercomputer to find the Ultimate Question.\n\nHumans were merely part of the computer's operating matrix.\n\nRan lab experiments on humans, who mistakenly believed they were the intelligent ones.\n\nFinal words before Earth's demolition: 'So long, and thanks for all the fish.'\n\nACTUAL ROLE: Programmers\n\nINTELLIGENCE: Hyper",
    ),
];
