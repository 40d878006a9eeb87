// Tiger Backend
//! Temporaries, labels and the namer that hands them out.

use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};

/// Virtual temps are numbered from here; lower ids belong to machine registers.
pub const FIRST_VIRTUAL_TEMP: u32 = 100;

/// A virtual register. Physical registers are temps too (see `MachineDesc`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temp(u32);

impl Temp {
  pub const fn new(id: u32) -> Self {
    Temp(id)
  }

  pub fn id(&self) -> u32 {
    self.0
  }

  pub fn is_virtual(&self) -> bool {
    self.0 >= FIRST_VIRTUAL_TEMP
  }
}

impl Display for Temp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    write!(fmt, "t{}", self.0)
  }
}

/// A symbolic code label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(String);

impl Label {
  pub fn named(name: &str) -> Self {
    Label(name.to_string())
  }

  pub fn name(&self) -> &str {
    &self.0
  }
}

impl Display for Label {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    write!(fmt, "{}", self.0)
  }
}

/// Issues fresh temps and labels. One namer serves a whole compilation run,
/// so temps are never reused across procedures.
#[derive(Debug, Clone)]
pub struct Namer {
  temp_index: u32,
  label_index: u32,
}

impl Namer {
  pub fn new() -> Self {
    Namer {
      temp_index: FIRST_VIRTUAL_TEMP,
      label_index: 0,
    }
  }

  /// Continue numbering after temps that already appear in parsed input.
  pub fn resume_after(mut self, max_temp: Option<Temp>) -> Self {
    if let Some(t) = max_temp {
      self.temp_index = self.temp_index.max(t.id() + 1);
    }
    self
  }

  pub fn new_temp(&mut self) -> Temp {
    let result = self.temp_index;
    self.temp_index += 1;
    Temp(result)
  }

  /// Labels for the IR translator; the backend itself only reuses the
  /// labels it is given.
  #[allow(dead_code)]
  pub fn new_label(&mut self) -> Label {
    let result = self.label_index;
    self.label_index += 1;
    Label(format!("L{}", result))
  }
}

/// Temp to register-name map produced by the allocator and read by emission.
#[derive(Debug, Clone, Default)]
pub struct TempMap(HashMap<Temp, String>);

impl TempMap {
  pub fn new() -> Self {
    TempMap(HashMap::new())
  }

  pub fn insert(&mut self, temp: Temp, name: String) {
    self.0.insert(temp, name);
  }

  pub fn get(&self, temp: Temp) -> Option<&str> {
    self.0.get(&temp).map(|s| s.as_str())
  }

  /// Register name for `temp`, or its `t<n>` spelling when unassigned.
  pub fn lookup(&self, temp: Temp) -> String {
    match self.0.get(&temp) {
      Some(name) => name.clone(),
      None => temp.to_string(),
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Temp, &String)> {
    self.0.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_namer_never_reuses_temps() {
    let mut namer = Namer::new();
    let a = namer.new_temp();
    let b = namer.new_temp();
    assert_ne!(a, b);
    assert!(a < b);
    assert!(a.is_virtual());
  }

  #[test]
  fn test_labels_are_numbered_apart_from_temps() {
    let mut namer = Namer::new();
    namer.new_temp();
    assert_eq!(namer.new_label(), Label::named("L0"));
    assert_eq!(namer.new_label(), Label::named("L1"));
  }

  #[test]
  fn test_resume_after_parsed_temps() {
    let mut namer = Namer::new().resume_after(Some(Temp::new(140)));
    assert_eq!(namer.new_temp(), Temp::new(141));

    let mut namer = Namer::new().resume_after(Some(Temp::new(3)));
    assert_eq!(namer.new_temp(), Temp::new(FIRST_VIRTUAL_TEMP));
  }

  #[test]
  fn test_temp_map_falls_back_to_temp_name() {
    let mut map = TempMap::new();
    map.insert(Temp::new(0), "%rax".to_string());
    assert_eq!(map.lookup(Temp::new(0)), "%rax");
    assert_eq!(map.lookup(Temp::new(105)), "t105");
  }
}
