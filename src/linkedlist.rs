use anyhow::{bail, Result};
use core::fmt;
use std::fmt::Display;

/*
 * One cell of the chain. Each node exclusively owns its successor,
 * so releasing a node releases everything after it.
 */
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/*
 * Singly linked list. <head> is None when the list is empty.
 * Positions are 0-indexed from the head ; <len> counts the nodes
 * reachable from <head> and is kept in sync by every mutation.
 */
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /*
     * Prepend <value>. The new node takes the old head as its
     * successor and becomes the new head.
     */
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /*
     * Append <value> : walk to the last link and hang the new
     * node there. The empty list is just a walk of zero steps.
     */
    pub fn push_back(&mut self, value: T) {
        let mut curr = &mut self.head;
        while let Some(node) = curr {
            curr = &mut node.next;
        }
        *curr = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /*
     * Insert <value> so it ends up at index <position>, shifting
     * the rest back. <position> ranges from 0 (prepend) up to the
     * current length (append) ; past that the walk runs off the
     * end and the list is left untouched.
     */
    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        let mut curr = &mut self.head;
        for _ in 0..position {
            match curr {
                Some(node) => curr = &mut node.next,
                None => bail!(
                    "position {} out of bounds for list of length {}",
                    position,
                    self.len
                ),
            }
        }
        let next = curr.take();
        *curr = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /*
     * Value stored at index <position>.
     */
    pub fn get(&self, position: usize) -> Result<&T> {
        let mut curr = &self.head;
        let mut index = 0;
        while let Some(node) = curr {
            if index == position {
                return Ok(&node.value);
            }
            curr = &node.next;
            index += 1;
        }
        bail!(
            "position {} out of bounds for list of length {}",
            position,
            self.len
        )
    }

    /*
     * Index of the first node holding <value>, scanning from the
     * head. Absence is not an error, just None.
     */
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut curr = &self.head;
        let mut position = 0;
        while let Some(node) = curr {
            if node.value == *value {
                return Some(position);
            }
            curr = &node.next;
            position += 1;
        }
        None
    }

    /*
     * Unlink the first node holding <value>. Absence is a silent
     * no-op ; the return value says whether anything was removed.
     */
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut curr = &mut self.head;
        while curr.as_ref().is_some_and(|node| node.value != *value) {
            // The loop condition just saw a node here
            curr = &mut curr.as_mut().unwrap().next;
        }
        match curr.take() {
            Some(node) => {
                *curr = node.next;
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /*
     * Unlink the node at index <position> and hand back its value.
     * Out-of-bounds positions (including 0 on an empty list) fail
     * before anything is relinked.
     */
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        let mut curr = &mut self.head;
        for _ in 0..position {
            match curr {
                Some(node) => curr = &mut node.next,
                None => bail!(
                    "position {} out of bounds for list of length {}",
                    position,
                    self.len
                ),
            }
        }
        match curr.take() {
            Some(node) => {
                *curr = node.next;
                self.len -= 1;
                Ok(node.value)
            }
            None => bail!(
                "position {} out of bounds for list of length {}",
                position,
                self.len
            ),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Render the chain head to tail : "10 -> 15 -> 20 -> None".
 * The empty list is just "None".
 */
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut curr = &self.head;
        while let Some(node) = curr {
            write!(f, "{} -> ", node.value)?;
            curr = &node.next;
        }
        write!(f, "None")
    }
}

/*
 * Drop iteratively : the default recursive drop of the Box chain
 * would blow the stack on a long enough list.
 */
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &LinkedList<i64>) -> Vec<i64> {
        (0..list.len()).map(|i| *list.get(i).unwrap()).collect()
    }

    #[test]
    fn push_front_becomes_head() {
        let mut list = LinkedList::new();
        list.push_front(10);
        list.push_front(20);
        assert_eq!(list.get(0).unwrap(), &20);
        assert_eq!(list.get(1).unwrap(), &10);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn push_back_on_empty_and_nonempty() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(values(&list), vec![1]);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_every_valid_position() {
        for k in 0..=3 {
            let mut list = LinkedList::new();
            for v in [0, 1, 2] {
                list.push_back(v);
            }
            list.insert(99, k).unwrap();
            assert_eq!(list.get(k).unwrap(), &99);
            assert_eq!(list.len(), 4);
        }
    }

    #[test]
    fn insert_past_length_fails_unchanged() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        assert!(list.insert(99, 3).is_err());
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn get_out_of_bounds() {
        let mut list = LinkedList::new();
        assert!(list.get(0).is_err());
        list.push_back(1);
        assert!(list.get(1).is_err());
        assert_eq!(list.get(0).unwrap(), &1);
    }

    #[test]
    fn position_of_first_match_or_none() {
        let mut list = LinkedList::new();
        for v in [5, 7, 5] {
            list.push_back(v);
        }
        assert_eq!(list.position_of(&5), Some(0));
        assert_eq!(list.position_of(&7), Some(1));
        assert_eq!(list.position_of(&8), None);
    }

    #[test]
    fn remove_value_head_middle_and_absent() {
        let mut list = LinkedList::new();
        for v in [1, 2, 3] {
            list.push_back(v);
        }
        assert!(!list.remove_value(&9));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert!(list.remove_value(&1));
        assert_eq!(values(&list), vec![2, 3]);
        assert!(list.remove_value(&3));
        assert_eq!(values(&list), vec![2]);
    }

    #[test]
    fn remove_at_bounds() {
        let mut list = LinkedList::new();
        assert!(list.remove_at(0).is_err());
        list.push_back(1);
        list.push_back(2);
        assert!(list.remove_at(2).is_err());
        assert_eq!(list.remove_at(1).unwrap(), 2);
        assert_eq!(list.remove_at(0).unwrap(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn insert_then_remove_round_trips() {
        for k in 0..=3 {
            let mut list = LinkedList::new();
            for v in [0, 1, 2] {
                list.push_back(v);
            }
            list.insert(99, k).unwrap();
            assert_eq!(list.remove_at(k).unwrap(), 99);
            assert_eq!(values(&list), vec![0, 1, 2]);
        }
    }

    #[test]
    fn display_format() {
        let mut list = LinkedList::new();
        assert_eq!(list.to_string(), "None");
        list.push_back(10);
        assert_eq!(list.to_string(), "10 -> None");
        list.push_back(20);
        assert_eq!(list.to_string(), "10 -> 20 -> None");
    }

    #[test]
    fn full_scenario() {
        let mut list = LinkedList::new();
        list.push_front(10);
        list.push_back(20);
        list.insert(15, 1).unwrap();
        assert_eq!(list.to_string(), "10 -> 15 -> 20 -> None");
        assert_eq!(list.get(1).unwrap(), &15);
        assert_eq!(list.position_of(&20), Some(2));
        assert!(list.remove_value(&15));
        assert_eq!(list.remove_at(1).unwrap(), 20);
        assert_eq!(list.to_string(), "10 -> None");
    }
}
