use super::records::{Location, Order, OrderStatus, Phone, Product, Transaction};

fn product(name: &str, description: &str, price: f64, stock: i64, image: Option<&str>) -> Product {
    Product {
        name: name.to_string(),
        description: description.to_string(),
        price,
        stock,
        image_src: image.map(str::to_string),
        ..Default::default()
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("Arabica Beans", "Medium roast, 1kg bag", 14.5, 32, Some("/images/arabica.jpg")),
        product("Basmati Rice", "Long grain, 5kg sack", 9.99, 58, Some("/images/basmati.jpg")),
        product("Cane Sugar", "Unrefined, 1kg", 2.75, 120, None),
        product("Dark Chocolate", "72% cocoa bar", 3.4, 75, Some("/images/chocolate.jpg")),
        product("Extra Virgin Olive Oil", "Cold pressed, 750ml", 11.2, 24, None),
        product("Fusilli", "Durum wheat pasta, 500g", 1.85, 90, None),
        product("Green Tea", "Sencha, 20 sachets", 4.6, 41, Some("/images/green-tea.jpg")),
        product("Honey", "Wildflower, 350g jar", 6.3, 17, None),
    ]
}

fn phone(name: &str, description: &str, brand: &str, price: f64) -> Phone {
    Phone {
        name: name.to_string(),
        description: description.to_string(),
        brand: brand.to_string(),
        price,
        ..Default::default()
    }
}

pub fn phones() -> Vec<Phone> {
    vec![
        phone("Pixel 8", "6.2\" OLED, 128GB", "Google", 699.0),
        phone("Galaxy A54", "6.4\" AMOLED, 256GB", "Samsung", 449.0),
        phone("iPhone 15", "6.1\" Super Retina, 128GB", "Apple", 799.0),
        phone("Nord CE 3", "6.7\" AMOLED, 128GB", "OnePlus", 329.0),
    ]
}

fn location(name: &str, address: &str, city: &str, state: &str, zip_code: &str) -> Location {
    Location {
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        ..Default::default()
    }
}

pub fn locations() -> Vec<Location> {
    vec![
        location("Central Warehouse", "12 Dock Road", "Portland", "OR", "97201"),
        location("Downtown Store", "401 Main Street", "Seattle", "WA", "98104"),
        location("Harbor Pickup", "8 Pier Avenue", "Tacoma", "WA", "98402"),
    ]
}

fn order(customer_name: &str, total_price: f64, status: OrderStatus) -> Order {
    Order {
        customer_name: customer_name.to_string(),
        total_price,
        status,
        ..Default::default()
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        order("Amelia Hart", 31.99, OrderStatus::Completed),
        order("Bruno Silva", 12.4, OrderStatus::Pending),
        order("Chen Wei", 58.0, OrderStatus::Canceled),
        order("Dana Okafor", 7.5, OrderStatus::Pending),
    ]
}

fn transaction(
    order_id: &str,
    product_name: &str,
    quantity: i64,
    purchase_price: f64,
    status: OrderStatus,
) -> Transaction {
    Transaction {
        order_id: order_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        purchase_price,
        total_price: purchase_price * quantity as f64,
        status,
        ..Default::default()
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("demo-order-1", "Arabica Beans", 2, 14.5, OrderStatus::Completed),
        transaction("demo-order-1", "Cane Sugar", 1, 2.75, OrderStatus::Completed),
        transaction("demo-order-2", "Fusilli", 4, 1.85, OrderStatus::Pending),
        transaction("demo-order-3", "Honey", 3, 6.3, OrderStatus::Canceled),
    ]
}
