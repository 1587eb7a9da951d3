pub mod color;
pub mod memory;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![GameDescriptor {
        name: "memory",
        title: "Card memory game",
        description: "Match each picture with its name in as few attempts as you can",
    },
    GameDescriptor {
        name: "color",
        title: "Get the color game",
        description: "Pick the name of the ink color, not the word, for 30 seconds",
    }]
}

pub fn find(name: &str) -> Option<GameDescriptor>
{
    registry()
        .into_iter()
        .find(|game| game.name.eq_ignore_ascii_case(name))
}
