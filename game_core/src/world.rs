use glam::Vec2;
use hecs::{Entity, World};

use crate::{Node, Position, Scene, Sprite};

/// A [`Scene`] kept in a hecs world, one entity per node
pub struct WorldScene {
    pub world: World,
    pub viewport: Vec2,
}

impl WorldScene {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            world: World::new(),
            viewport,
        }
    }

    /// Spawn a node, with a sprite if the host draws one for it
    pub fn spawn_node(&mut self, node: Node, pos: Vec2, sprite: Option<Sprite>) -> Entity {
        let entity = self.world.spawn((node, Position(pos)));
        if let Some(sprite) = sprite {
            // Entity was spawned just above
            let _ = self.world.insert_one(entity, sprite);
        }
        entity
    }

    /// Despawn every entity tagged with `node`; returns whether any existed
    pub fn remove_node(&mut self, node: Node) -> bool {
        let entities: Vec<Entity> = self
            .world
            .query::<&Node>()
            .iter()
            .filter(|(_e, n)| **n == node)
            .map(|(e, _n)| e)
            .collect();

        for entity in &entities {
            let _ = self.world.despawn(*entity);
        }
        !entities.is_empty()
    }
}

impl Scene for WorldScene {
    fn position(&self, node: Node) -> Option<Vec2> {
        self.world
            .query::<(&Node, &Position)>()
            .iter()
            .find(|(_e, (n, _pos))| **n == node)
            .map(|(_e, (_n, pos))| pos.0)
    }

    fn set_position(&mut self, node: Node, pos: Vec2) {
        for (_entity, (n, position)) in self.world.query_mut::<(&Node, &mut Position)>() {
            if *n == node {
                position.0 = pos;
                break;
            }
        }
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn sprite_size(&self, node: Node) -> Option<Vec2> {
        self.world
            .query::<(&Node, &Sprite)>()
            .iter()
            .find(|(_e, (n, _sprite))| **n == node)
            .map(|(_e, (_n, sprite))| sprite.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_scene() -> WorldScene {
        let mut scene = WorldScene::new(Vec2::new(800.0, 600.0));
        scene.spawn_node(Node::Ball, Vec2::new(400.0, 300.0), None);
        scene.spawn_node(
            Node::Left,
            Vec2::new(20.0, 300.0),
            Some(Sprite::new(Vec2::new(10.0, 50.0))),
        );
        scene
    }

    #[test]
    fn test_position_lookup_by_node() {
        let scene = setup_scene();
        assert_eq!(scene.position(Node::Ball), Some(Vec2::new(400.0, 300.0)));
        assert_eq!(scene.position(Node::Left), Some(Vec2::new(20.0, 300.0)));
        assert_eq!(scene.position(Node::Right), None);
    }

    #[test]
    fn test_set_position_only_touches_named_node() {
        let mut scene = setup_scene();
        scene.set_position(Node::Left, Vec2::new(20.0, 120.0));

        assert_eq!(scene.position(Node::Left), Some(Vec2::new(20.0, 120.0)));
        assert_eq!(scene.position(Node::Ball), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_set_position_on_missing_node_is_ignored() {
        let mut scene = setup_scene();
        scene.set_position(Node::Right, Vec2::new(780.0, 300.0));
        assert_eq!(scene.position(Node::Right), None);
    }

    #[test]
    fn test_sprite_size_only_for_sprited_nodes() {
        let scene = setup_scene();
        assert_eq!(scene.sprite_size(Node::Left), Some(Vec2::new(10.0, 50.0)));
        assert_eq!(scene.sprite_size(Node::Ball), None);
        assert_eq!(scene.viewport_size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_remove_node() {
        let mut scene = setup_scene();
        assert!(scene.remove_node(Node::Ball));
        assert_eq!(scene.position(Node::Ball), None);
        assert!(!scene.remove_node(Node::Ball));
    }
}
