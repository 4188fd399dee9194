use flatlife::*;

fn main() {
  let mut uni = Universe::with_config(64, BoundaryMode::Wrap, true).unwrap();
  uni.insert_glider_gun((1, 1)).unwrap();

  uni.simulate(120);
  println!("{} cells alive after 120 generations", uni.grid().population());

  export::save_image(&uni, "gun.png").unwrap();
}
